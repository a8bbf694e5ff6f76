//! Faceted-search integration (the optional feature path).
//!
//! At index time the derived "Frascati base" facet list is attached to the
//! outgoing index document; at query time a caller-supplied list of facet
//! values becomes an exact-membership filter clause. Both sides no-op when
//! the plugin is disabled for the submission's context.

use std::sync::Arc;

use frascati_core::{facet::derive_facets, taxonomy::ClassificationTree};
use frascati_data::ClassificationStore;
use serde_json::{Value, json};

use crate::{error::Result, settings::EnabledCache};

/// The facet field attached to index documents and filtered at query time.
pub const FACET_FIELD: &str = "frascatiBases";

// ─── Tree resolution ─────────────────────────────────────────────────────────

/// Resolve the tree used for facet derivation.
///
/// Candidates are tried in priority order — interface locale, submission
/// locale, primary locale — and the first with a dedicated resource wins;
/// the store's fallback locale is the last resort. The same chain applies
/// at index and query time so both sides see identical facet values.
pub fn facet_tree(
  store: &ClassificationStore,
  candidates: &[&str],
) -> Result<Arc<ClassificationTree>> {
  for locale in candidates {
    if let Some(tree) = store.load_exact(locale)? {
      return Ok(tree);
    }
  }
  let requested = candidates
    .first()
    .copied()
    .unwrap_or(frascati_data::FALLBACK_LOCALE);
  Ok(store.load(requested)?)
}

// ─── Index side ──────────────────────────────────────────────────────────────

/// Derive the facet values for a submission's assigned subject terms.
pub fn index_facets<S: AsRef<str>>(
  store: &ClassificationStore,
  locale_candidates: &[&str],
  assigned: &[S],
) -> Result<Vec<String>> {
  let tree = facet_tree(store, locale_candidates)?;
  Ok(derive_facets(&tree, assigned))
}

/// Attach `facets` to an outgoing index document under
/// `body.frascatiBases`. A missing `body` object is created; a non-object
/// document is left untouched.
pub fn attach_facets(document: &mut Value, facets: &[String]) {
  let Some(root) = document.as_object_mut() else {
    return;
  };
  let body = root.entry("body").or_insert_with(|| json!({}));
  if let Some(body) = body.as_object_mut() {
    body.insert(FACET_FIELD.to_string(), json!(facets));
  }
}

// ─── Query side ──────────────────────────────────────────────────────────────

/// The exact-membership filter clause for `requested` facet values, or
/// `None` when no values were requested — a missing facet filter is a
/// no-op, not an error.
pub fn facet_filter(requested: &[String]) -> Option<Value> {
  if requested.is_empty() {
    return None;
  }
  let mut terms = serde_json::Map::new();
  terms.insert(format!("{FACET_FIELD}.keyword"), json!(requested));
  Some(json!({ "terms": terms }))
}

// ─── Context-aware bundle ────────────────────────────────────────────────────

/// Bundles the store with the per-context enabled flags so the host adapter
/// can drive both the indexing and the query path through one object.
pub struct SearchIntegration {
  store:   Arc<ClassificationStore>,
  enabled: EnabledCache,
}

impl SearchIntegration {
  pub fn new(store: Arc<ClassificationStore>, enabled: EnabledCache) -> Self {
    Self { store, enabled }
  }

  /// Attach derived facets to `document` for a submission in `context_id`.
  /// No-op when the plugin is disabled for that context.
  pub fn index_document<S: AsRef<str>>(
    &self,
    context_id: i64,
    locale_candidates: &[&str],
    assigned: &[S],
    document: &mut Value,
  ) -> Result<()> {
    if !self.enabled.enabled(context_id) {
      return Ok(());
    }
    let facets = index_facets(&self.store, locale_candidates, assigned)?;
    attach_facets(document, &facets);
    Ok(())
  }

  /// The filter clause for `requested` facet values, or `None` when the
  /// plugin is disabled for `context_id` or no values were requested.
  pub fn query_filter(
    &self,
    context_id: i64,
    requested: &[String],
  ) -> Option<Value> {
    if !self.enabled.enabled(context_id) {
      return None;
    }
    facet_filter(requested)
  }
}
