use std::sync::Arc;

use serde_json::Value as JsonValue;
use thiserror::Error;

use pricebook_core::DomainError;
use pricebook_infra::currency::{CurrencyError, CurrencyNormalizer};
use pricebook_infra::store::{ProductRepository, ProductStore, StoreError};
use pricebook_products::{Product, ProductDraft, parse_payload};

/// Failure of the create-product pipeline, terminal on first occurrence.
#[derive(Debug, Error)]
pub enum CreateProductError {
    /// The payload failed structural validation (malformed-input class).
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The price could not be normalized to USD (external-dependency class).
    #[error("currency conversion failed")]
    Conversion(#[from] CurrencyError),

    /// The record could not be persisted (external-dependency class).
    #[error("product persistence failed")]
    Store(#[from] StoreError),
}

/// Backends for the request pipeline, constructed once at startup and passed
/// into the router explicitly (no ambient global client state).
pub struct AppServices {
    repository: ProductRepository<Arc<dyn ProductStore>>,
    normalizer: CurrencyNormalizer,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>, normalizer: CurrencyNormalizer) -> Self {
        Self {
            repository: ProductRepository::new(store),
            normalizer,
        }
    }

    /// The full pipeline over one parsed request body:
    /// validate, normalize to USD, assign an id, persist.
    ///
    /// Strictly sequential; a conversion failure means nothing is persisted.
    /// Validation failures are hard stops here, not advisory.
    pub async fn create_product(&self, body: &JsonValue) -> Result<Product, CreateProductError> {
        let payload = parse_payload(body)?;

        let price = self
            .normalizer
            .to_usd(&payload.currency, payload.value)
            .await?;

        let product = self.repository.create(ProductDraft::new(payload.name, price))?;

        tracing::info!(id = %product.id, "product created");
        Ok(product)
    }
}
