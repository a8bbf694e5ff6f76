//! Boundary-facing vocabulary provider for the Frascati classification.
//!
//! The host application's adapter translates its lifecycle events into the
//! plain function calls exposed here: vocabulary-lookup gating
//! ([`lookup::VocabularyProvider`]), form-field vocabulary injection
//! ([`form::attach_vocabulary`]), and the optional faceted-search
//! integration ([`search`]). Host-owned settings persistence stays behind
//! [`settings::SettingsBackend`]; this crate never talks to a database or
//! the network.

pub mod error;
pub mod form;
pub mod lookup;
pub mod search;
pub mod settings;

pub use error::{Error, Result};
