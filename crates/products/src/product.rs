use serde::{Deserialize, Serialize};

use pricebook_core::ProductId;

/// A persisted catalog entry.
///
/// Invariant: `price` is always USD-denominated by the time a `Product`
/// exists; currency normalization happens on the draft, before identifier
/// assignment. Products are created exactly once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

/// Candidate record: a product before identifier assignment and persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Promote the draft to a full product under the given identifier.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}
