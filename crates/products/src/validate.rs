//! Structural validation of the inbound create-product payload.
//!
//! The payload arrives as untyped JSON; the checks below decide whether it
//! has the shape required to build a product. Rule order is significant:
//! when several rules are violated, the first one in this list is reported.
//!
//! 1. `name` present and non-empty
//! 2. `price` object present
//! 3. `price.value` present
//! 4. `price.value` numeric
//! 5. `price.currency` present

use serde_json::Value;

use pricebook_core::{DomainError, DomainResult};

/// The typed view of a payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductPayload {
    pub name: String,
    pub value: f64,
    pub currency: String,
}

/// Check the payload against the shape rules without extracting anything.
///
/// Pure and side-effect free; reports the first violated rule.
pub fn validate_payload(body: &Value) -> DomainResult<()> {
    match body.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => {}
        _ => return Err(DomainError::validation("no name provided")),
    }

    let price = match body.get("price") {
        Some(p) if !p.is_null() => p,
        _ => return Err(DomainError::validation("no price provided")),
    };

    let value = match price.get("value") {
        Some(v) if !v.is_null() => v,
        _ => return Err(DomainError::validation("no price value provided")),
    };

    if !value.is_number() {
        return Err(DomainError::validation("price value must be a number"));
    }

    match price.get("currency").and_then(Value::as_str) {
        Some(_) => {}
        None => return Err(DomainError::validation("no price currency provided")),
    }

    Ok(())
}

/// Validate, then extract the typed payload.
///
/// Extraction cannot fail once validation has passed; the accessors below
/// re-check the same shape the rules established.
pub fn parse_payload(body: &Value) -> DomainResult<CreateProductPayload> {
    validate_payload(body)?;

    let name = body["name"].as_str().unwrap_or_default().to_string();
    let value = body["price"]["value"].as_f64().unwrap_or_default();
    let currency = body["price"]["currency"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    Ok(CreateProductPayload {
        name,
        value,
        currency,
    })
}
