//! Search patterns over product names.

use core::ops::RangeInclusive;

use catalog_core::{MAX_SEARCH_DIGITS, MIN_SEARCH_DIGITS};

use crate::name::ProductName;

/// Letter-count-parameterized name pattern.
///
/// Equivalent to the anchored regular expression
/// `^[A-Za-z]{letters}[0-9]{2,3}$`. Since every [`ProductName`] is already a
/// letter run followed by a digit run, matching reduces to comparing the run
/// lengths; building the pattern never fails, whatever the letter count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    letters: usize,
    digits: RangeInclusive<usize>,
}

impl NamePattern {
    /// Pattern for names with exactly `letters` letters and 2 or 3 digits.
    pub fn with_letter_count(letters: usize) -> Self {
        Self {
            letters,
            digits: MIN_SEARCH_DIGITS..=MAX_SEARCH_DIGITS,
        }
    }

    pub fn letter_count(&self) -> usize {
        self.letters
    }

    /// Whether `name` fully matches the pattern.
    pub fn matches(&self, name: &ProductName) -> bool {
        name.letters().len() == self.letters && self.digits.contains(&name.digits().len())
    }

    /// Like [`NamePattern::matches`], for raw strings. Strings that are not
    /// valid product names never match.
    pub fn is_match(&self, name: &str) -> bool {
        ProductName::parse(name).is_ok_and(|n| self.matches(&n))
    }
}

impl core::fmt::Display for NamePattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "^[A-Za-z]{{{}}}[0-9]{{{},{}}}$",
            self.letters,
            self.digits.start(),
            self.digits.end()
        )
    }
}
