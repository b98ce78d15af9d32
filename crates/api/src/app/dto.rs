use pricebook_products::Product;

/// Success-response mapping: the persisted product as flat JSON.
pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id.to_string(),
        "name": product.name,
        "price": product.price,
    })
}
