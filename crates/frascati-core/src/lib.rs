//! Core types and pure logic for the Frascati controlled vocabulary.
//!
//! This crate is deliberately free of filesystem and wire-format
//! dependencies. All other crates depend on it; it depends on nothing but
//! `serde` and `thiserror`.

pub mod error;
pub mod facet;
pub mod suggest;
pub mod taxonomy;

pub use error::{Error, Result};
