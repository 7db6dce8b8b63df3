//! Strongly-typed identifiers used across the catalog.

use core::convert::Infallible;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Store identifier of a product listing (e.g. `"825459863"`).
///
/// Opaque text: the catalog never validates it against a live storefront.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductIdentifier(String);

impl ProductIdentifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ProductIdentifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductIdentifier {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<ProductIdentifier> for String {
    fn from(value: ProductIdentifier) -> Self {
        value.0
    }
}

impl AsRef<str> for ProductIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductIdentifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl FromStr for ProductIdentifier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}
