use std::collections::HashMap;
use std::sync::RwLock;

use pricebook_core::ProductId;
use pricebook_products::Product;

use super::r#trait::{ProductStore, StoreError};

/// In-memory product table.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    items: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.items.read().ok()?.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProductStore for InMemoryProductStore {
    fn put(&self, product: &Product) -> Result<(), StoreError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::Rejected("lock poisoned".to_string()))?;

        items.insert(product.id, product.clone());
        Ok(())
    }
}
