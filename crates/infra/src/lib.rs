//! Infrastructure adapters for the product pipeline.
//!
//! Two boundaries live here: product persistence (`store`) and the external
//! exchange-rate source (`currency`). Both are trait seams so the HTTP layer
//! can be wired with real backends in production and doubles in tests.

pub mod currency;
pub mod store;
