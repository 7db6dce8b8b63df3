//! Sample host: load a catalog, list it, and tap through every product.

mod config;

use anyhow::{Context, Result};
use storecatalog_catalog::CatalogLoader;
use storecatalog_core::ProductIdentifier;
use storecatalog_storefront::{
    BrowserEffect, BrowserMessage, BrowserOptions, CatalogBrowser, StaticStorefront,
    StorePagePresenter,
};

use crate::config::{LISTED_PRODUCTS, SampleConfig};

fn main() -> Result<()> {
    storecatalog_observability::init();

    let config = SampleConfig::from_env()?;
    let bytes = config.catalog_bytes()?;
    let catalog = CatalogLoader::new(config.load_options())
        .load(&bytes)
        .context("loading catalog")?;

    tracing::info!(
        groups = catalog.len(),
        products = catalog.product_count(),
        excluding = config.excluding.as_deref(),
        "catalog loaded"
    );
    for group in catalog.groups() {
        tracing::info!(title = group.title(), products = group.len(), "group");
        for product in group.products() {
            tracing::info!(
                identifier = %product.identifier(),
                name = product.name(),
                image = %product.image_url(),
                "product"
            );
        }
    }

    let presenter =
        StorePagePresenter::for_platform(StaticStorefront::new(LISTED_PRODUCTS), config.platform);
    let identifiers: Vec<ProductIdentifier> =
        catalog.products().map(|p| p.identifier().clone()).collect();

    let mut browser = CatalogBrowser::new(catalog, BrowserOptions { close_button: true });
    let mut failures = 0usize;
    for identifier in identifiers {
        for effect in browser.tap(identifier, &presenter) {
            if let BrowserEffect::ReportFailure { identifier, error } = effect {
                failures += 1;
                tracing::warn!(%identifier, %error, "failed to show store page for product");
            }
        }
    }

    let dismissed = browser
        .update(BrowserMessage::CloseRequested)
        .contains(&BrowserEffect::Dismiss);
    tracing::info!(failures, dismissed, "sample finished");

    Ok(())
}
