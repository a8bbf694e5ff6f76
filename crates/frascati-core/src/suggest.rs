//! Substring suggestion matching over a classification tree.
//!
//! This is the autocomplete half of the vocabulary: a free-text query is
//! matched case-insensitively against every subheading label, and each hit
//! is wrapped in a caller-facing [`SuggestionRecord`].

use serde::Serialize;

use crate::taxonomy::ClassificationTree;

/// The `source` tag attached to every suggestion from this vocabulary.
pub const VOCABULARY_SOURCE: &str = "Frascati";

/// Queries shorter than this (after trimming) return no suggestions.
pub const DEFAULT_MIN_TERM_LENGTH: usize = 3;

/// A single autocomplete suggestion. Created fresh per query; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRecord {
  /// The subheading's display name.
  pub term:       String,
  /// The subheading's stable identifier.
  pub identifier: String,
  /// Always [`VOCABULARY_SOURCE`].
  pub source:     &'static str,
}

/// Case-insensitive substring matches for `term` across `tree`, in document
/// order.
///
/// The query is trimmed and lowercased first; anything shorter than
/// `min_length` characters yields an empty iterator — a short query is
/// rejected, not an error. Matching is plain substring containment, so
/// `"chem"` matches `"Biochemistry"`. The iterator is pure and restartable:
/// calling again with the same inputs yields the same sequence.
pub fn suggest<'a>(
  tree: &'a ClassificationTree,
  term: &str,
  min_length: usize,
) -> impl Iterator<Item = SuggestionRecord> + use<'a> {
  let needle = term.trim().to_lowercase();
  let gated = needle.chars().count() >= min_length;
  tree
    .subheadings()
    .filter(move |(_, sub)| {
      gated && sub.label.to_lowercase().contains(&needle)
    })
    .map(|(_, sub)| SuggestionRecord {
      term:       sub.label.clone(),
      identifier: sub.identifier.clone(),
      source:     VOCABULARY_SOURCE,
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
