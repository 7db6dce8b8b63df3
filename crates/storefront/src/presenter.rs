//! Native product-page presentation.
//!
//! The touch and desktop surfaces differ only in how the page is shown
//! (full-screen modal vs. sheet), so there is a single presenter
//! parameterized by [`PresentationStyle`] rather than one per platform.

use std::collections::BTreeSet;

use thiserror::Error;

use storecatalog_core::ProductIdentifier;

/// Why a product page could not be shown.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresentationError {
    /// The storefront does not know this identifier.
    #[error("no product with identifier {0} on the storefront")]
    UnknownProduct(ProductIdentifier),

    /// The storefront knows the product but could not load its page.
    #[error("product page failed to load: {0}")]
    LoadFailed(String),
}

/// `Ok(())` when the page was shown and dismissed normally.
pub type PresentationOutcome = Result<(), PresentationError>;

/// Vendor storefront seam: load (and show) the page for one product.
pub trait StorefrontClient {
    fn load_product(&self, identifier: &ProductIdentifier) -> PresentationOutcome;
}

impl<T: StorefrontClient + ?Sized> StorefrontClient for &T {
    fn load_product(&self, identifier: &ProductIdentifier) -> PresentationOutcome {
        (**self).load_product(identifier)
    }
}

/// Something that can put a product page in front of the user.
pub trait ProductPagePresenter {
    fn present(&self, identifier: &ProductIdentifier) -> PresentationOutcome;
}

/// Host platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Touch,
    Desktop,
}

impl core::str::FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "touch" => Ok(Platform::Touch),
            "desktop" => Ok(Platform::Desktop),
            other => Err(PlatformParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown platform '{0}' (expected 'touch' or 'desktop')")]
pub struct PlatformParseError(String);

/// How a product page is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationStyle {
    /// Modal covering the whole screen (touch devices).
    FullScreen,
    /// Sheet attached to the host window (desktop).
    Sheet,
}

impl PresentationStyle {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Touch => PresentationStyle::FullScreen,
            Platform::Desktop => PresentationStyle::Sheet,
        }
    }
}

/// Presents product pages through a [`StorefrontClient`] in a fixed style.
#[derive(Debug, Clone)]
pub struct StorePagePresenter<C> {
    client: C,
    style: PresentationStyle,
}

impl<C: StorefrontClient> StorePagePresenter<C> {
    pub fn new(client: C, style: PresentationStyle) -> Self {
        Self { client, style }
    }

    pub fn for_platform(client: C, platform: Platform) -> Self {
        Self::new(client, PresentationStyle::for_platform(platform))
    }

    pub fn style(&self) -> PresentationStyle {
        self.style
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C: StorefrontClient> ProductPagePresenter for StorePagePresenter<C> {
    fn present(&self, identifier: &ProductIdentifier) -> PresentationOutcome {
        tracing::debug!(style = ?self.style, %identifier, "presenting product page");

        match self.client.load_product(identifier) {
            Ok(()) => {
                tracing::debug!(%identifier, "product page dismissed");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(style = ?self.style, %identifier, error = %err, "product page failed");
                Err(err)
            }
        }
    }
}

/// In-memory storefront that knows a fixed set of identifiers.
///
/// Intended for tests and the sample host.
#[derive(Debug, Clone, Default)]
pub struct StaticStorefront {
    known: BTreeSet<ProductIdentifier>,
}

impl StaticStorefront {
    pub fn new<I, T>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ProductIdentifier>,
    {
        Self {
            known: identifiers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn knows(&self, identifier: &ProductIdentifier) -> bool {
        self.known.contains(identifier)
    }
}

impl StorefrontClient for StaticStorefront {
    fn load_product(&self, identifier: &ProductIdentifier) -> PresentationOutcome {
        if self.knows(identifier) {
            Ok(())
        } else {
            Err(PresentationError::UnknownProduct(identifier.clone()))
        }
    }
}
