//! Form-field vocabulary injection.
//!
//! Attaches per-locale vocabulary blocks to the subjects field of the host's
//! metadata forms. Form descriptors cross the boundary as JSON, so every
//! type here serializes camelCase.

use frascati_core::taxonomy::ClassificationTree;
use frascati_data::ClassificationStore;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Form ids whose subjects field receives the vocabulary.
pub const TARGET_FORM_IDS: &[&str] = &["metadata", "forTheEditors"];

/// The field the vocabulary is attached to.
pub const TARGET_FIELD: &str = "subjects";

// ─── Descriptor types ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDescriptor {
  pub id:                     String,
  pub fields:                 Vec<FormField>,
  /// The display locales the host's active form declares as supported.
  pub supported_form_locales: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
  pub name:         String,
  /// Vocabulary blocks attached by providers; empty until one injects.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub vocabularies: Vec<VocabularyBlock>,
}

/// One locale's vocabulary in the minimal display shape: base labels over
/// subheading label/identifier pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyBlock {
  pub locale: String,
  pub items:  Vec<VocabularyBase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyBase {
  pub label: String,
  pub items: Vec<VocabularyItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
  pub label:      String,
  pub identifier: String,
}

// ─── Injection ───────────────────────────────────────────────────────────────

/// Flatten `tree` into the display shape attached to form fields, keeping
/// document order.
pub fn vocabulary_block(tree: &ClassificationTree) -> VocabularyBlock {
  VocabularyBlock {
    locale: tree.locale().to_string(),
    items:  tree
      .bases()
      .iter()
      .map(|base| VocabularyBase {
        label: base.label.clone(),
        items: base
          .subheadings
          .iter()
          .map(|sub| VocabularyItem {
            label:      sub.label.clone(),
            identifier: sub.identifier.clone(),
          })
          .collect(),
      })
      .collect(),
  }
}

/// Attach per-locale vocabulary blocks to the subjects field of `form`.
///
/// No-op unless the form id is one of [`TARGET_FORM_IDS`] and a field named
/// [`TARGET_FIELD`] exists; scanning stops at the first matching field.
/// Supported locales with no dedicated classification resource are omitted
/// rather than substituted from the fallback, so the form never shows a
/// vocabulary mislabeled with the wrong locale.
pub fn attach_vocabulary(
  store: &ClassificationStore,
  form: &mut FormDescriptor,
) -> Result<()> {
  if !TARGET_FORM_IDS.contains(&form.id.as_str()) {
    return Ok(());
  }
  if !form.fields.iter().any(|field| field.name == TARGET_FIELD) {
    return Ok(());
  }

  let mut blocks = Vec::new();
  for locale in &form.supported_form_locales {
    match store.load_exact(locale)? {
      Some(tree) => blocks.push(vocabulary_block(&tree)),
      None => {
        tracing::debug!(locale, "no classification resource; omitting block");
      }
    }
  }
  if blocks.is_empty() {
    return Ok(());
  }

  if let Some(field) =
    form.fields.iter_mut().find(|field| field.name == TARGET_FIELD)
  {
    field.vocabularies = blocks;
  }
  Ok(())
}
