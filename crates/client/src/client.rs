use catalog_core::ServerError;
use catalog_products::Product;
use catalog_servers::Server;

/// Answers price questions against a single server backend.
#[derive(Debug, Clone)]
pub struct Client<S> {
    server: S,
}

impl<S: Server> Client<S> {
    pub fn new(server: S) -> Self {
        Self { server }
    }

    pub fn server(&self) -> &S {
        &self.server
    }

    /// Sum of the prices of the products matching `letter_count` (or the
    /// server's default letter count when `None`).
    ///
    /// Returns `None` when the search is rejected as too broad or matches
    /// nothing: an empty search has no total, not a total of zero.
    pub fn get_total_price(&self, letter_count: Option<usize>) -> Option<f64> {
        let result = match letter_count {
            Some(n) => self.server.get_entries(n),
            None => self.server.get_default_entries(),
        };

        let entries = match result {
            Ok(entries) => entries,
            Err(ServerError::TooManyProductsFound { found, limit }) => {
                tracing::debug!(?letter_count, found, limit, "no total price: search too broad");
                return None;
            }
        };

        if entries.is_empty() {
            tracing::debug!(?letter_count, "no total price: no matching products");
            return None;
        }

        Some(entries.iter().map(Product::price).sum())
    }
}
