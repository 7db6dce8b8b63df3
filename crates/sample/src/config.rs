//! Environment-driven configuration for the sample host.

use std::path::PathBuf;

use anyhow::{Context, Result};
use storecatalog_catalog::LoadOptions;
use storecatalog_storefront::Platform;

/// Catalog bundled with the sample, used when `CATALOG_PATH` is unset.
pub const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Identifiers the sample storefront recognizes.
pub const LISTED_PRODUCTS: [&str; 3] = ["825459863", "301618970", "417317449"];

#[derive(Debug, Clone, Default)]
pub struct SampleConfig {
    pub catalog_path: Option<PathBuf>,
    pub excluding: Option<String>,
    pub platform: Platform,
}

impl SampleConfig {
    /// Read `CATALOG_PATH`, `CATALOG_EXCLUDING` and `CATALOG_PLATFORM`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let platform = match non_empty("CATALOG_PLATFORM") {
            Some(raw) => raw.parse().context("parsing CATALOG_PLATFORM")?,
            None => Platform::default(),
        };

        Ok(Self {
            catalog_path: non_empty("CATALOG_PATH").map(PathBuf::from),
            excluding: non_empty("CATALOG_EXCLUDING"),
            platform,
        })
    }

    pub fn load_options(&self) -> LoadOptions {
        match &self.excluding {
            Some(identifier) => LoadOptions::new().excluding(identifier.as_str()),
            None => LoadOptions::new(),
        }
    }

    /// Raw catalog bytes: the configured file, or the bundled sample.
    pub fn catalog_bytes(&self) -> Result<Vec<u8>> {
        match &self.catalog_path {
            Some(path) => {
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))
            }
            None => Ok(BUNDLED_CATALOG.as_bytes().to_vec()),
        }
    }
}
