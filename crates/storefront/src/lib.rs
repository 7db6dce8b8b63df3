//! Storefront-facing collaborators of a loaded catalog.
//!
//! - [`presenter`]: present a native product page for an identifier and report
//!   success or a structured failure. One implementation, two presentation
//!   styles chosen by runtime configuration.
//! - [`browser`]: explicit state of a catalog grid (selection, failed cells,
//!   close button) driven by messages, emitting effects for the host to run.
//!
//! Nothing here talks to a real storefront; [`StorefrontClient`] is the seam a
//! platform integration implements.

pub mod browser;
pub mod presenter;

pub use browser::{BrowserEffect, BrowserMessage, BrowserOptions, CatalogBrowser, ProductStatus};
pub use presenter::{
    Platform, PlatformParseError, PresentationError, PresentationOutcome, PresentationStyle,
    ProductPagePresenter, StaticStorefront, StorePagePresenter, StorefrontClient,
};
