//! Validated product names.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult};

/// Product name grammar: one or more ASCII letters, then one or more ASCII digits.
///
/// Letters and digits are disjoint classes, so a matching name splits into its
/// two halves in exactly one way.
static NAME_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<letters>[A-Za-z]+)(?P<digits>[0-9]+)$")
        .expect("product name grammar is a valid regex")
});

/// A product name known to match `^[A-Za-z]+[0-9]+$` (e.g. `AB12`, `DF123`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName {
    value: String,
    // Byte offset where the digit run starts (names are ASCII).
    split: usize,
}

impl ProductName {
    /// Validate `name` against the product name grammar.
    pub fn parse(name: impl Into<String>) -> DomainResult<Self> {
        let value = name.into();
        let split = match NAME_GRAMMAR.captures(&value).and_then(|c| c.name("digits")) {
            Some(digits) => digits.start(),
            None => return Err(DomainError::invalid_product_name(value)),
        };
        Ok(Self { value, split })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The leading alphabetic run.
    pub fn letters(&self) -> &str {
        &self.value[..self.split]
    }

    /// The trailing digit run.
    pub fn digits(&self) -> &str {
        &self.value[self.split..]
    }
}

impl core::fmt::Display for ProductName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl core::str::FromStr for ProductName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProductName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ProductName> for String {
    fn from(value: ProductName) -> Self {
        value.value
    }
}
