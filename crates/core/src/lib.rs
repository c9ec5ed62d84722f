//! `catalog-core`: shared building blocks for the product catalog.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error taxonomy, the search configuration and the value-object marker.

pub mod config;
pub mod error;
pub mod value_object;

pub use config::{DEFAULT_LETTER_COUNT, MAX_SEARCH_DIGITS, MIN_SEARCH_DIGITS, N_MAX_RETURNED_ENTRIES};
pub use error::{DomainError, DomainResult, ServerError, ServerResult};
pub use value_object::ValueObject;
