//! Store catalog module.
//!
//! Turns a JSON catalog document into an ordered, validated list of product
//! groups, optionally leaving out one product identifier. Implemented purely as
//! deterministic logic: the caller supplies the bytes, nothing here touches the
//! network, the disk, or a storefront.

pub mod loader;
pub mod model;

pub use loader::{CatalogLoader, LoadOptions, load};
pub use model::{Catalog, Product, ProductGroup};

pub use storecatalog_core::{CatalogError, CatalogResult, ProductIdentifier};
