//! Error types for `frascati-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("duplicate subheading identifier {identifier:?} in {locale:?} classification tree")]
  DuplicateIdentifier { locale: String, identifier: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
