//! Error types for `frascati-provider`.
//!
//! Only data-loading failures are errors. Declining an unsupported
//! vocabulary, an empty suggestion list, and a missing facet filter are all
//! ordinary values — "found nothing" and "cannot operate" stay distinct
//! signals.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Data(#[from] frascati_data::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
