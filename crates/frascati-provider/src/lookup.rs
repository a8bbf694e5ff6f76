//! The vocabulary-lookup boundary.
//!
//! The host raises a lookup event carrying `(vocabulary, term, locale)`; the
//! provider answers only for the vocabulary/locale pairs it is configured
//! for, and declines otherwise so the host can defer to other vocabulary
//! providers.

use std::sync::Arc;

use frascati_core::suggest::{
  self, DEFAULT_MIN_TERM_LENGTH, SuggestionRecord,
};
use frascati_data::ClassificationStore;

use crate::error::Result;

/// The host's controlled-vocabulary key for submission subjects.
pub const SUBMISSION_SUBJECT: &str = "submissionSubject";

/// The outcome of one lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
  /// This provider handled the request. The records may be empty — a short
  /// or unmatched query is a valid result, not an error.
  Handled(Vec<SuggestionRecord>),
  /// The `(vocabulary, locale)` pair is not one this provider serves; other
  /// providers should get their turn.
  Declined,
}

/// Answers lookup requests for the vocabulary/locale pairs it serves.
pub struct VocabularyProvider {
  store:           Arc<ClassificationStore>,
  allowed:         Vec<(String, Vec<String>)>,
  min_term_length: usize,
}

impl VocabularyProvider {
  /// A provider serving the default pair: submission subjects in English.
  pub fn new(store: Arc<ClassificationStore>) -> Self {
    Self {
      store,
      allowed: vec![(SUBMISSION_SUBJECT.to_string(), vec![
        "en".to_string(),
      ])],
      min_term_length: DEFAULT_MIN_TERM_LENGTH,
    }
  }

  /// Replace the allowed `(vocabulary, locales)` pairs.
  pub fn with_allowed(
    mut self,
    allowed: Vec<(String, Vec<String>)>,
  ) -> Self {
    self.allowed = allowed;
    self
  }

  /// Override the minimum query length.
  pub fn with_min_term_length(mut self, min_term_length: usize) -> Self {
    self.min_term_length = min_term_length;
    self
  }

  fn allows(&self, vocabulary: &str, locale: &str) -> bool {
    self.allowed.iter().any(|(vocab, locales)| {
      vocab == vocabulary && locales.iter().any(|l| l == locale)
    })
  }

  /// Answer one lookup request. An absent term is treated as empty and gets
  /// rejected by the minimum-length gate; data-loading failures propagate.
  pub fn suggest(
    &self,
    vocabulary: &str,
    term: Option<&str>,
    locale: &str,
  ) -> Result<LookupOutcome> {
    if !self.allows(vocabulary, locale) {
      tracing::trace!(vocabulary, locale, "declining unsupported vocabulary");
      return Ok(LookupOutcome::Declined);
    }
    let tree = self.store.load(locale)?;
    let records =
      suggest::suggest(&tree, term.unwrap_or(""), self.min_term_length)
        .collect();
    Ok(LookupOutcome::Handled(records))
  }
}
