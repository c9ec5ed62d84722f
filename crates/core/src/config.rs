//! Search configuration shared by every server backend.
//!
//! These are fixed, process-wide values. Backends read them directly instead of
//! carrying their own copies, so every backend applies the same bounds.

/// Inclusive cap on the number of matches a search may return.
///
/// A search matching more products than this is rejected as too broad
/// (`ServerError::TooManyProductsFound`) rather than truncated.
pub const N_MAX_RETURNED_ENTRIES: usize = 3;

/// Letter count used when the caller does not supply one.
pub const DEFAULT_LETTER_COUNT: usize = 1;

/// Minimum number of trailing digits a searchable product name carries.
pub const MIN_SEARCH_DIGITS: usize = 2;

/// Maximum number of trailing digits a searchable product name carries.
pub const MAX_SEARCH_DIGITS: usize = 3;
