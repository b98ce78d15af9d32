//! Product persistence boundary.
//!
//! This module defines an infrastructure-facing abstraction for inserting
//! product records into a key-value table without making any storage
//! assumptions.

pub mod in_memory;
#[cfg(feature = "redis")]
pub mod redis;
pub mod r#trait;

pub use in_memory::InMemoryProductStore;
#[cfg(feature = "redis")]
pub use redis::RedisProductStore;
pub use r#trait::{ProductStore, StoreError};

use pricebook_core::ProductId;
use pricebook_products::{Product, ProductDraft};

/// Repository over a [`ProductStore`]: assigns identifiers and persists drafts.
///
/// A fresh identifier is generated on every attempt, so retrying after an
/// ambiguous failure (e.g. a client-side timeout of a write that actually
/// succeeded) can leave a duplicate record under a second id. No retry is
/// performed here; retry policy belongs to the caller.
pub struct ProductRepository<S> {
    store: S,
}

impl<S> ProductRepository<S>
where
    S: ProductStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Assign a new unique identifier and durably store the record.
    ///
    /// The write is an unconditional insert keyed by the generated id.
    pub fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let product = draft.into_product(ProductId::new());
        self.store.put(&product)?;
        Ok(product)
    }
}
