//! Catalog loading: decode, exclude, drop empty groups, enforce non-empty.
//!
//! Loading is a pure function of its input. The same bytes and the same
//! options always produce the same [`Catalog`] or the same [`CatalogError`].

use storecatalog_core::{CatalogError, CatalogResult, ProductIdentifier};

use crate::model::{Catalog, CatalogDocument, ProductGroup};

/// Load-time options.
///
/// Exactly one identifier can be excluded, e.g. the host app's own listing in
/// a catalog shared by all of a developer's apps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    excluding: Option<ProductIdentifier>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave every product with this identifier out of the catalog.
    pub fn excluding(mut self, identifier: impl Into<ProductIdentifier>) -> Self {
        self.excluding = Some(identifier.into());
        self
    }

    pub fn excluded(&self) -> Option<&ProductIdentifier> {
        self.excluding.as_ref()
    }
}

/// Decodes catalog documents under a fixed set of [`LoadOptions`].
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    options: LoadOptions,
}

impl CatalogLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Decode `bytes` into a [`Catalog`].
    ///
    /// 1. Decode the document; any shape/syntax/URL problem is
    ///    [`CatalogError::Decoding`] and nothing else happens.
    /// 2. Remove the excluded identifier from every group, keeping order.
    /// 3. Drop groups left with no products, keeping order.
    /// 4. Fail with [`CatalogError::EmptyCatalog`] if no group remains.
    pub fn load(&self, bytes: &[u8]) -> CatalogResult<Catalog> {
        let document: CatalogDocument = serde_jsonrc::from_slice(bytes)?;

        let groups_in = document.product_groups.len();
        let products_in: usize = document.product_groups.iter().map(ProductGroup::len).sum();

        let groups = filter_groups(document.product_groups, self.options.excluded());
        let products_out: usize = groups.iter().map(ProductGroup::len).sum();

        tracing::debug!(
            groups_in,
            products_in,
            groups_out = groups.len(),
            products_out,
            excluding = self.options.excluded().map(ProductIdentifier::as_str),
            "catalog decoded"
        );

        if groups.is_empty() {
            return Err(CatalogError::empty_catalog());
        }

        Ok(Catalog::from_groups(groups))
    }
}

/// Load `bytes`, leaving out `excluding` if given.
pub fn load(bytes: &[u8], excluding: Option<&str>) -> CatalogResult<Catalog> {
    let options = match excluding {
        Some(identifier) => LoadOptions::new().excluding(identifier),
        None => LoadOptions::new(),
    };
    CatalogLoader::new(options).load(bytes)
}

fn filter_groups(
    groups: Vec<ProductGroup>,
    excluding: Option<&ProductIdentifier>,
) -> Vec<ProductGroup> {
    groups
        .into_iter()
        .map(|group| group.without(excluding))
        .filter(|group| !group.is_empty())
        .collect()
}
