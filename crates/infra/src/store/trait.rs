use std::sync::Arc;

use thiserror::Error;

use pricebook_products::Product;

/// Product store operation error.
///
/// These are infrastructure errors (backend unreachable, write rejected) as
/// opposed to domain errors (validation). They must never be silently
/// swallowed; callers log them and surface a generic failure upstream.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected the write (throttling, permissions, bad state).
    #[error("store rejected write: {0}")]
    Rejected(String),

    /// The backend could not be reached or the operation failed in transit.
    #[error("store backend failure")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Key-value product table keyed by product id.
///
/// `put` is an unconditional insert: no compare-and-swap, no idempotency.
/// Implementations must not retry; a single failed write fails the request.
pub trait ProductStore: Send + Sync {
    fn put(&self, product: &Product) -> Result<(), StoreError>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn put(&self, product: &Product) -> Result<(), StoreError> {
        (**self).put(product)
    }
}
