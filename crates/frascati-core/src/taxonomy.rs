//! The Frascati classification taxonomy — a two-level tree of broad research
//! fields ("bases") containing named subfields ("subheadings").
//!
//! Trees are immutable after construction and preserve the ordering of their
//! source document. Ordering matters: suggestion results and facet values
//! are enumerated in document order so the UI and the search index stay
//! deterministic.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Tree nodes ──────────────────────────────────────────────────────────────

/// A named subfield within a [`Base`].
///
/// The `identifier` is a stable opaque code (e.g. `"1.06"`) shared across
/// locales; it serves as the vocabulary entry's external key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subheading {
  pub label:      String,
  pub identifier: String,
}

/// A broad research field containing an ordered run of subheadings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base {
  pub label:       String,
  pub subheadings: Vec<Subheading>,
}

// ─── Tree ────────────────────────────────────────────────────────────────────

/// One locale's classification tree.
///
/// Constructed only through [`ClassificationTree::new`], which enforces the
/// invariant that every subheading identifier is unique within the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationTree {
  locale: String,
  bases:  Vec<Base>,
}

impl ClassificationTree {
  /// Build a tree for `locale`, validating identifier uniqueness.
  pub fn new(locale: impl Into<String>, bases: Vec<Base>) -> Result<Self> {
    let locale = locale.into();
    {
      let mut seen = HashSet::new();
      for base in &bases {
        for sub in &base.subheadings {
          if !seen.insert(sub.identifier.as_str()) {
            return Err(Error::DuplicateIdentifier {
              locale,
              identifier: sub.identifier.clone(),
            });
          }
        }
      }
    }
    Ok(Self { locale, bases })
  }

  /// The locale of the source document this tree was loaded from.
  pub fn locale(&self) -> &str { &self.locale }

  /// The bases in source-document order.
  pub fn bases(&self) -> &[Base] { &self.bases }

  /// Whether the tree carries no subheadings at all.
  pub fn is_empty(&self) -> bool {
    self.bases.iter().all(|b| b.subheadings.is_empty())
  }

  /// Flat iterator over every subheading in document order: base order,
  /// then subheading order within each base.
  pub fn subheadings(&self) -> impl Iterator<Item = (&Base, &Subheading)> {
    self
      .bases
      .iter()
      .flat_map(|base| base.subheadings.iter().map(move |sub| (base, sub)))
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
