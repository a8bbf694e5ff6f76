//! Derivation of coarse "Frascati base" facets from a submission's assigned
//! subject terms.
//!
//! Authors pick fine-grained subheadings; faceted browsing wants the broad
//! field above each pick. Matching here is exact and case-sensitive — the
//! assigned terms came from this same vocabulary, so fuzzy matching would
//! only invent facets.

use std::collections::HashSet;

use crate::taxonomy::ClassificationTree;

/// Collect the labels of every base with at least one subheading whose label
/// is an exact member of `assigned`.
///
/// The result is deduplicated and ordered by the tree's base order, so it
/// depends only on the set of assigned labels: reordering `assigned` or
/// re-running on identical input changes nothing. Assigned labels that match
/// no known subheading contribute nothing and are not an error.
pub fn derive_facets<S: AsRef<str>>(
  tree: &ClassificationTree,
  assigned: &[S],
) -> Vec<String> {
  let assigned: HashSet<&str> = assigned.iter().map(|s| s.as_ref()).collect();
  if assigned.is_empty() {
    return Vec::new();
  }
  tree
    .bases()
    .iter()
    .filter(|base| {
      base
        .subheadings
        .iter()
        .any(|sub| assigned.contains(sub.label.as_str()))
    })
    .map(|base| base.label.clone())
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::taxonomy::{Base, Subheading};

  fn sub(label: &str, identifier: &str) -> Subheading {
    Subheading {
      label:      label.to_string(),
      identifier: identifier.to_string(),
    }
  }

  fn tree() -> ClassificationTree {
    ClassificationTree::new("en", vec![
      Base {
        label:       "Natural sciences".to_string(),
        subheadings: vec![
          sub("Mathematics", "1.01"),
          sub("Biological sciences", "1.06"),
        ],
      },
      Base {
        label:       "Humanities".to_string(),
        subheadings: vec![sub("History and archaeology", "6.01")],
      },
    ])
    .unwrap()
  }

  #[test]
  fn empty_assignment_yields_empty_set() {
    let tree = tree();
    assert!(derive_facets::<&str>(&tree, &[]).is_empty());
  }

  #[test]
  fn assigned_subheading_yields_parent_base() {
    let tree = tree();
    assert_eq!(derive_facets(&tree, &["Biological sciences"]), vec![
      "Natural sciences"
    ]);
  }

  #[test]
  fn two_picks_in_one_base_are_deduplicated() {
    let tree = tree();
    let facets =
      derive_facets(&tree, &["Mathematics", "Biological sciences"]);
    assert_eq!(facets, vec!["Natural sciences"]);
  }

  #[test]
  fn result_order_follows_tree_not_input() {
    let tree = tree();
    let forward =
      derive_facets(&tree, &["Mathematics", "History and archaeology"]);
    let backward =
      derive_facets(&tree, &["History and archaeology", "Mathematics"]);
    assert_eq!(forward, vec!["Natural sciences", "Humanities"]);
    assert_eq!(forward, backward);
  }

  #[test]
  fn unknown_and_case_mismatched_labels_contribute_nothing() {
    let tree = tree();
    assert!(derive_facets(&tree, &["Underwater basket weaving"]).is_empty());
    // Exact match only: facet derivation is case-sensitive.
    assert!(derive_facets(&tree, &["biological sciences"]).is_empty());
  }

  #[test]
  fn rerunning_on_identical_input_is_stable() {
    let tree = tree();
    let labels = ["Biological sciences", "History and archaeology"];
    assert_eq!(derive_facets(&tree, &labels), derive_facets(&tree, &labels));
  }
}
