//! `storecatalog-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering, no storefront).

pub mod error;
pub mod id;

pub use error::{CatalogError, CatalogResult};
pub use id::ProductIdentifier;
