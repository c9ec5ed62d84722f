use std::collections::HashMap;

use catalog_products::Product;

use crate::server::Server;

/// Backend storing products keyed by name.
///
/// Duplicate names collapse: the last product supplied for a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapServer {
    products: HashMap<String, Product>,
}

impl MapServer {
    pub fn new(products: Vec<Product>) -> Self {
        products.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }
}

impl Server for MapServer {
    fn all_products(&self) -> Vec<&Product> {
        self.products.values().collect()
    }
}

impl From<Vec<Product>> for MapServer {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl FromIterator<Product> for MapServer {
    fn from_iter<T: IntoIterator<Item = Product>>(iter: T) -> Self {
        Self {
            products: iter
                .into_iter()
                .map(|p| (p.name().to_string(), p))
                .collect(),
        }
    }
}
