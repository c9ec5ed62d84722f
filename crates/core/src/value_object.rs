//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances with
/// the same attributes are the same value. Catalog entries are value objects;
/// tests compare search results as multisets, so equality must be structural.
///
/// The trait requires:
/// - **Clone**: search results are owned copies of the stored values
/// - **Eq + Hash**: values can be counted and deduplicated
/// - **Debug**: values show up in assertions and log fields
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
