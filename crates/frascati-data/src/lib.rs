//! Loading of bundled Frascati classification data.
//!
//! Converts per-locale JSON documents and the legacy flat XML document into
//! [`frascati_core`] trees, with fallback-locale substitution and a
//! per-locale read-through cache. Purely synchronous filesystem access; no
//! network, no database.

pub mod error;
mod json;
mod store;
mod xml;

pub use error::{Error, Result};
pub use json::parse_json;
pub use store::{ClassificationStore, FALLBACK_LOCALE};
pub use xml::parse_legacy_xml;
