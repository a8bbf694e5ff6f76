//! Error types for `frascati-data`.
//!
//! A short or unmatched query is never an error; the only fatal conditions
//! here are missing or malformed data files.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Neither the requested locale's resource nor the fallback locale's
  /// resource exists. Callers must never receive a silently empty tree
  /// instead of this.
  #[error(
    "no classification data for locale {locale:?} (fallback {fallback:?} also missing)"
  )]
  DataUnavailable { locale: String, fallback: String },

  #[error("failed to read {path}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed classification JSON for locale {locale:?}: {source}")]
  Json {
    locale: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("malformed classification XML for locale {locale:?}: {message}")]
  Xml { locale: String, message: String },

  #[error(transparent)]
  Invalid(#[from] frascati_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
