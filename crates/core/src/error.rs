//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Both variants are fatal to the load that produced them; there is no partial
/// result. Keep storefront/presentation failures out of this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The input bytes do not match the document shape (syntax, missing field,
    /// wrong type, malformed URL).
    #[error("decoding failed at line {line}, column {column}: {message}")]
    Decoding {
        message: String,
        line: usize,
        column: usize,
    },

    /// The document decoded, but no populated product group survived filtering.
    #[error("catalog has no populated product groups")]
    EmptyCatalog,
}

impl CatalogError {
    pub fn decoding(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Decoding {
            message: message.into(),
            line,
            column,
        }
    }

    pub fn empty_catalog() -> Self {
        Self::EmptyCatalog
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding { .. })
    }

    pub fn is_empty_catalog(&self) -> bool {
        matches!(self, Self::EmptyCatalog)
    }
}

impl From<serde_jsonrc::Error> for CatalogError {
    fn from(err: serde_jsonrc::Error) -> Self {
        // Display appends " at line X column Y"; keep only the cause.
        let line = err.line();
        let column = err.column();
        let full = err.to_string();
        let suffix = format!(" at line {line} column {column}");
        let message = full.strip_suffix(&suffix).unwrap_or(&full).to_string();
        Self::Decoding {
            message,
            line,
            column,
        }
    }
}
