//! Catalog document model.
//!
//! Wire shape:
//!
//! ```json
//! { "productGroups": [
//!     { "title": "Awesome Games",
//!       "products": [
//!         { "name": "FlippyBit",
//!           "details": "Party like it's 1979!",
//!           "identifier": "825459863",
//!           "imageURL": "https://rebisoft.com/appicons/flippybit512.png" }
//!       ] }
//! ] }
//! ```
//!
//! Unknown fields are ignored. Trailing commas after the last element of an
//! array or object are accepted. `imageURL` must be an absolute URL; relative
//! references are rejected.

use serde::{Deserialize, Serialize};
use url::Url;

use storecatalog_core::ProductIdentifier;

/// One store listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    details: String,
    identifier: ProductIdentifier,
    #[serde(rename = "imageURL")]
    image_url: Url,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        details: impl Into<String>,
        identifier: impl Into<ProductIdentifier>,
        image_url: Url,
    ) -> Self {
        Self {
            name: name.into(),
            details: details.into(),
            identifier: identifier.into(),
            image_url,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn identifier(&self) -> &ProductIdentifier {
        &self.identifier
    }

    pub fn image_url(&self) -> &Url {
        &self.image_url
    }
}

/// A titled, ordered run of products.
///
/// Groups handed out by a [`Catalog`] are never empty. A group built by hand
/// with [`ProductGroup::new`] carries no such guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductGroup {
    title: String,
    products: Vec<Product>,
}

impl ProductGroup {
    pub fn new(title: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            title: title.into(),
            products,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Keep only products whose identifier differs from `excluding`.
    pub(crate) fn without(self, excluding: Option<&ProductIdentifier>) -> Self {
        let Some(excluding) = excluding else {
            return self;
        };
        Self {
            title: self.title,
            products: self
                .products
                .into_iter()
                .filter(|product| product.identifier() != excluding)
                .collect(),
        }
    }
}

/// Raw top-level document, before filtering.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CatalogDocument {
    #[serde(rename = "productGroups")]
    pub(crate) product_groups: Vec<ProductGroup>,
}

/// Validated, filtered result of a load: an ordered, non-empty list of
/// non-empty product groups.
///
/// Only [`crate::CatalogLoader`] builds one, so the invariant holds for every
/// value in circulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    #[serde(rename = "productGroups")]
    product_groups: Vec<ProductGroup>,
}

impl Catalog {
    pub(crate) fn from_groups(product_groups: Vec<ProductGroup>) -> Self {
        debug_assert!(!product_groups.is_empty());
        debug_assert!(product_groups.iter().all(|group| !group.is_empty()));
        Self { product_groups }
    }

    /// Decode `bytes` with an optional exclusion. Shorthand for [`crate::load`].
    pub fn from_slice(
        bytes: &[u8],
        excluding: Option<&str>,
    ) -> storecatalog_core::CatalogResult<Self> {
        crate::load(bytes, excluding)
    }

    pub fn product_groups(&self) -> &[ProductGroup] {
        &self.product_groups
    }

    pub fn groups(&self) -> impl Iterator<Item = &ProductGroup> {
        self.product_groups.iter()
    }

    /// All products in display order (group order, then product order).
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.product_groups.iter().flat_map(|group| group.products.iter())
    }

    /// First product carrying `identifier`, in display order.
    ///
    /// Duplicate identifiers are not rejected at load time; only the first
    /// occurrence is reachable through this lookup.
    pub fn product(&self, identifier: &ProductIdentifier) -> Option<&Product> {
        self.products().find(|product| product.identifier() == identifier)
    }

    pub fn contains(&self, identifier: &ProductIdentifier) -> bool {
        self.product(identifier).is_some()
    }

    /// Number of groups (always at least one).
    pub fn len(&self) -> usize {
        self.product_groups.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.product_groups.is_empty()
    }

    pub fn product_count(&self) -> usize {
        self.product_groups.iter().map(ProductGroup::len).sum()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProductGroup;
    type IntoIter = core::slice::Iter<'a, ProductGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.product_groups.iter()
    }
}
