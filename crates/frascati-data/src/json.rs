//! Per-locale JSON classification documents.
//!
//! Wire shape, one document per locale
//! (`classifications.{locale}.json`):
//!
//! ```json
//! {
//!   "items": [
//!     {
//!       "label": "Natural sciences",
//!       "items": [{ "label": "Mathematics", "identifier": "1.01" }]
//!     }
//!   ]
//! }
//! ```

use frascati_core::taxonomy::{Base, ClassificationTree, Subheading};
use serde::Deserialize;

use crate::error::{Error, Result};

// ─── Wire structs ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct Document {
  items: Vec<BaseEntry>,
}

#[derive(Deserialize)]
struct BaseEntry {
  label: String,
  items: Vec<SubheadingEntry>,
}

#[derive(Deserialize)]
struct SubheadingEntry {
  label:      String,
  identifier: String,
}

// ─── Parser ──────────────────────────────────────────────────────────────────

/// Parse one locale's JSON document into a validated tree.
pub fn parse_json(locale: &str, input: &str) -> Result<ClassificationTree> {
  let doc: Document =
    serde_json::from_str(input).map_err(|source| Error::Json {
      locale: locale.to_string(),
      source,
    })?;

  let bases = doc
    .items
    .into_iter()
    .map(|base| Base {
      label:       base.label,
      subheadings: base
        .items
        .into_iter()
        .map(|sub| Subheading {
          label:      sub.label,
          identifier: sub.identifier,
        })
        .collect(),
    })
    .collect();

  Ok(ClassificationTree::new(locale, bases)?)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
