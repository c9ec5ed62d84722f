//! Catalog client: reduces server searches to a total price.

pub mod client;

pub use client::Client;
