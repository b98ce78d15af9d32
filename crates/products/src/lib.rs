//! Products domain module.
//!
//! This crate contains the product entity and the structural validation of
//! inbound create-product payloads, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod product;
pub mod validate;

pub use product::{Product, ProductDraft};
pub use validate::{CreateProductPayload, parse_payload, validate_payload};
