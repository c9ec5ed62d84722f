//! Products domain module.
//!
//! This crate contains the catalog entry value type and the name grammar it
//! enforces, implemented purely as deterministic domain logic (no IO, no
//! storage).

pub mod name;
pub mod pattern;
pub mod product;

pub use name::ProductName;
pub use pattern::NamePattern;
pub use product::Product;
