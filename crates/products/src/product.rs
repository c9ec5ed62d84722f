use serde::{Deserialize, Serialize};

use catalog_core::{DomainResult, ValueObject};

use crate::name::ProductName;

/// Catalog entry: a validated name and a price.
///
/// Immutable once built. Equality and hashing cover the `(name, price)` pair.
/// A negative-zero price is stored as `0.0`, so numerically equal prices are
/// bitwise equal and `Eq`/`Hash` stay consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    name: ProductName,
    #[serde(deserialize_with = "deserialize_price")]
    price: f64,
}

// `-0.0 + 0.0` is `+0.0`; every other value is unchanged.
fn canonical_price(price: f64) -> f64 {
    price + 0.0
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    f64::deserialize(deserializer).map(canonical_price)
}

impl Product {
    /// Build a product, validating `name` against `^[A-Za-z]+[0-9]+$`.
    pub fn new(name: impl Into<String>, price: f64) -> DomainResult<Self> {
        Ok(Self::with_name(ProductName::parse(name)?, price))
    }

    /// Build a product from an already validated name.
    pub fn with_name(name: ProductName, price: f64) -> Self {
        Self {
            name,
            price: canonical_price(price),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn product_name(&self) -> &ProductName {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.price.total_cmp(&other.price).is_eq()
    }
}

impl Eq for Product {}

impl core::hash::Hash for Product {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.price.to_bits().hash(state);
    }
}

impl ValueObject for Product {}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::DomainError;
    use std::collections::HashSet;

    #[test]
    fn new_accepts_valid_names() {
        let product = Product::new("DF123", 2.0).unwrap();
        assert_eq!(product.name(), "DF123");
        assert_eq!(product.price(), 2.0);
        assert_eq!(product.product_name().digits(), "123");
    }

    #[test]
    fn new_rejects_invalid_names() {
        let err = Product::new("123DF", 2.0).unwrap_err();
        match err {
            DomainError::InvalidProductName(name) => assert_eq!(name, "123DF"),
            _ => panic!("Expected InvalidProductName error"),
        }
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Product::new("AB12", 1.5).unwrap(), Product::new("AB12", 1.5).unwrap());
        assert_ne!(Product::new("AB12", 1.5).unwrap(), Product::new("AB12", 2.0).unwrap());
        assert_ne!(Product::new("AB12", 1.5).unwrap(), Product::new("AB13", 1.5).unwrap());
    }

    #[test]
    fn hash_deduplicates_on_name_and_price() {
        let set: HashSet<Product> = [
            Product::new("AB12", 1.0).unwrap(),
            Product::new("AB12", 1.0).unwrap(),
            Product::new("AB12", 3.0).unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn signed_zero_prices_are_equal() {
        let positive = Product::new("AB12", 0.0).unwrap();
        let negative = Product::new("AB12", -0.0).unwrap();
        assert_eq!(positive, negative);
        assert!(negative.price().is_sign_positive());

        let set: HashSet<Product> = [positive, negative].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn deserialize_canonicalizes_negative_zero() {
        let product: Product = serde_json::from_str(r#"{"name":"AB12","price":-0.0}"#).unwrap();
        assert_eq!(product, Product::new("AB12", 0.0).unwrap());
        assert!(product.price().is_sign_positive());
    }

    #[test]
    fn nan_price_equals_itself() {
        let product = Product::new("AB12", f64::NAN).unwrap();
        assert_eq!(product, product.clone());
    }

    #[test]
    fn display_renders_name_and_price() {
        assert_eq!(Product::new("OK23", 1.5).unwrap().to_string(), "OK23:1.5");
        assert_eq!(Product::new("PP234", 2.0).unwrap().to_string(), "PP234:2");
    }

    #[test]
    fn serde_round_trip_keeps_the_value() {
        let product = Product::new("KP235", 6.0).unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "KP235", "price": 6.0 }));
        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn deserialize_rejects_invalid_names() {
        let result = serde_json::from_str::<Product>(r#"{"name":"K-235","price":6.0}"#);
        assert!(result.is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: names of letters followed by digits always construct.
            #[test]
            fn valid_names_never_fail(
                name in "[A-Za-z]{1,8}[0-9]{1,8}",
                price in -1.0e6f64..1.0e6
            ) {
                let product = Product::new(name.clone(), price).unwrap();
                prop_assert_eq!(product.name(), name.as_str());
                prop_assert_eq!(product.price(), price);
            }

            /// Property: names without a trailing digit run are rejected.
            #[test]
            fn names_without_digits_fail(name in "[A-Za-z]{0,8}") {
                prop_assert!(Product::new(name, 1.0).is_err());
            }

            /// Property: names starting with a digit are rejected.
            #[test]
            fn names_starting_with_digit_fail(name in "[0-9][A-Za-z0-9]{0,8}") {
                prop_assert!(Product::new(name, 1.0).is_err());
            }
        }
    }
}
