use pricebook_products::Product;

use super::r#trait::{ProductStore, StoreError};

/// Redis-backed product table.
///
/// Each product is stored as a hash at `product:{id}` with `name` as text
/// and `price` as numeric-as-text, matching the logical table layout.
pub struct RedisProductStore {
    client: redis::Client,
}

impl RedisProductStore {
    /// Connect to Redis.
    ///
    /// # Arguments
    /// * `redis_url` - connection URL (e.g. "redis://localhost:6379")
    pub fn connect(redis_url: impl AsRef<str>) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url.as_ref()).map_err(StoreError::backend)?;
        Ok(Self { client })
    }

    fn key(product: &Product) -> String {
        format!("product:{}", product.id)
    }
}

impl ProductStore for RedisProductStore {
    fn put(&self, product: &Product) -> Result<(), StoreError> {
        let mut conn = self.client.get_connection().map_err(StoreError::backend)?;

        let _: () = redis::cmd("HSET")
            .arg(Self::key(product))
            .arg("name")
            .arg(&product.name)
            .arg("price")
            .arg(product.price.to_string())
            .query(&mut conn)
            .map_err(StoreError::backend)?;

        Ok(())
    }
}
