//! Catalog grid state, driven by explicit messages.
//!
//! The host renders from [`CatalogBrowser`] accessors and feeds user actions
//! and presentation results back in as [`BrowserMessage`]s. Each message yields
//! the [`BrowserEffect`]s the host must carry out (show a page, report a
//! failure, dismiss the grid). No state is shared with the view layer.

use std::collections::BTreeSet;

use storecatalog_catalog::Catalog;
use storecatalog_core::ProductIdentifier;

use crate::presenter::{PresentationError, PresentationOutcome, ProductPagePresenter};

/// Display options for the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserOptions {
    /// Show a floating close button (hidden while a product page is up).
    pub close_button: bool,
}

/// Per-cell status a renderer draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStatus {
    Idle,
    Presenting,
    /// The storefront could not show this product; the cell is no longer tappable.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserMessage {
    ProductTapped(ProductIdentifier),
    PresentationFinished {
        identifier: ProductIdentifier,
        outcome: PresentationOutcome,
    },
    CloseRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEffect {
    PresentProductPage(ProductIdentifier),
    ReportFailure {
        identifier: ProductIdentifier,
        error: PresentationError,
    },
    Dismiss,
}

/// State of one catalog grid.
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    catalog: Catalog,
    options: BrowserOptions,
    selected: Option<ProductIdentifier>,
    failed: BTreeSet<ProductIdentifier>,
}

impl CatalogBrowser {
    pub fn new(catalog: Catalog, options: BrowserOptions) -> Self {
        Self {
            catalog,
            options,
            selected: None,
            failed: BTreeSet::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> BrowserOptions {
        self.options
    }

    /// Product whose page is currently being presented.
    pub fn selected(&self) -> Option<&ProductIdentifier> {
        self.selected.as_ref()
    }

    pub fn failed(&self) -> impl Iterator<Item = &ProductIdentifier> {
        self.failed.iter()
    }

    pub fn status(&self, identifier: &ProductIdentifier) -> ProductStatus {
        if self.failed.contains(identifier) {
            ProductStatus::Failed
        } else if self.selected.as_ref() == Some(identifier) {
            ProductStatus::Presenting
        } else {
            ProductStatus::Idle
        }
    }

    /// Overlay text for a failed cell, `None` otherwise.
    pub fn failure_caption(&self, identifier: &ProductIdentifier) -> Option<String> {
        self.failed.contains(identifier).then(|| {
            format!("A product with the identifier \"{identifier}\" couldn't be found on the App Store.")
        })
    }

    pub fn close_button_visible(&self) -> bool {
        self.options.close_button && self.selected.is_none()
    }

    /// Apply one message and return the effects the host must perform.
    pub fn update(&mut self, message: BrowserMessage) -> Vec<BrowserEffect> {
        match message {
            BrowserMessage::ProductTapped(identifier) => self.on_tapped(identifier),
            BrowserMessage::PresentationFinished { identifier, outcome } => {
                self.on_finished(identifier, outcome)
            }
            BrowserMessage::CloseRequested => {
                if self.close_button_visible() {
                    vec![BrowserEffect::Dismiss]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Run a full tap cycle synchronously against `presenter`.
    ///
    /// Returns every effect produced along the way, including the
    /// `PresentProductPage` already carried out.
    pub fn tap<P>(&mut self, identifier: ProductIdentifier, presenter: &P) -> Vec<BrowserEffect>
    where
        P: ProductPagePresenter + ?Sized,
    {
        let mut effects = Vec::new();
        for effect in self.update(BrowserMessage::ProductTapped(identifier)) {
            if let BrowserEffect::PresentProductPage(identifier) = &effect {
                let outcome = presenter.present(identifier);
                let finished = BrowserMessage::PresentationFinished {
                    identifier: identifier.clone(),
                    outcome,
                };
                effects.push(effect.clone());
                effects.extend(self.update(finished));
            } else {
                effects.push(effect);
            }
        }
        effects
    }

    fn on_tapped(&mut self, identifier: ProductIdentifier) -> Vec<BrowserEffect> {
        if let Some(selected) = &self.selected {
            tracing::debug!(%identifier, %selected, "tap ignored: presentation in flight");
            return Vec::new();
        }
        if self.failed.contains(&identifier) {
            tracing::debug!(%identifier, "tap ignored: product previously failed");
            return Vec::new();
        }
        if !self.catalog.contains(&identifier) {
            tracing::debug!(%identifier, "tap ignored: not in catalog");
            return Vec::new();
        }

        self.selected = Some(identifier.clone());
        vec![BrowserEffect::PresentProductPage(identifier)]
    }

    fn on_finished(
        &mut self,
        identifier: ProductIdentifier,
        outcome: PresentationOutcome,
    ) -> Vec<BrowserEffect> {
        if self.selected.as_ref() != Some(&identifier) {
            tracing::debug!(%identifier, "stale presentation result ignored");
            return Vec::new();
        }
        self.selected = None;

        match outcome {
            Ok(()) => Vec::new(),
            Err(error) => {
                self.failed.insert(identifier.clone());
                vec![BrowserEffect::ReportFailure { identifier, error }]
            }
        }
    }
}
