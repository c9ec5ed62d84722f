use std::sync::Arc;

use catalog_core::{DEFAULT_LETTER_COUNT, ServerResult};
use catalog_products::Product;

use crate::search;

/// A backend holding a fixed product collection.
///
/// Implementations only supply [`Server::all_products`]; searching is provided
/// and identical for every backend.
pub trait Server {
    /// Every product held by this backend, in no particular order.
    fn all_products(&self) -> Vec<&Product>;

    /// Products whose name has exactly `letter_count` letters followed by 2 or
    /// 3 digits, sorted by ascending price.
    ///
    /// Fails with `ServerError::TooManyProductsFound` when more products match
    /// than `N_MAX_RETURNED_ENTRIES`.
    fn get_entries(&self, letter_count: usize) -> ServerResult<Vec<Product>> {
        search::get_entries(self.all_products(), letter_count)
    }

    /// [`Server::get_entries`] with the default letter count.
    fn get_default_entries(&self) -> ServerResult<Vec<Product>> {
        self.get_entries(DEFAULT_LETTER_COUNT)
    }
}

impl<S> Server for &S
where
    S: Server + ?Sized,
{
    fn all_products(&self) -> Vec<&Product> {
        (**self).all_products()
    }
}

impl<S> Server for Box<S>
where
    S: Server + ?Sized,
{
    fn all_products(&self) -> Vec<&Product> {
        (**self).all_products()
    }
}

impl<S> Server for Arc<S>
where
    S: Server + ?Sized,
{
    fn all_products(&self) -> Vec<&Product> {
        (**self).all_products()
    }
}
