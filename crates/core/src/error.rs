//! Catalog error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type returned by server searches.
pub type ServerResult<T> = Result<T, ServerError>;

/// Domain-level error.
///
/// Construction-time validation failures live here. They are fatal to the one
/// value being built and are never recovered inside the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A product name did not match `^[A-Za-z]+[0-9]+$`.
    #[error("invalid product name: {0:?}")]
    InvalidProductName(String),

    /// A server search failed.
    #[error(transparent)]
    Server(#[from] ServerError),
}

impl DomainError {
    pub fn invalid_product_name(name: impl Into<String>) -> Self {
        Self::InvalidProductName(name.into())
    }
}

/// Error raised by a server while answering a search.
///
/// These are expected outcomes, not bugs: every direct caller of a search must
/// be prepared to handle them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// The query matched more products than the search cap allows.
    #[error("too many products found ({found} matches, limit {limit})")]
    TooManyProductsFound { found: usize, limit: usize },
}

impl ServerError {
    pub fn too_many_products(found: usize, limit: usize) -> Self {
        Self::TooManyProductsFound { found, limit }
    }
}
