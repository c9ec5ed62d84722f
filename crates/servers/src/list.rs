use catalog_products::Product;

use crate::server::Server;

/// Backend storing products in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListServer {
    products: Vec<Product>,
}

impl ListServer {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Server for ListServer {
    fn all_products(&self) -> Vec<&Product> {
        self.products.iter().collect()
    }
}

impl From<Vec<Product>> for ListServer {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl FromIterator<Product> for ListServer {
    fn from_iter<T: IntoIterator<Item = Product>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
