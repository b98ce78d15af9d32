use std::sync::Arc;

use pricebook_api::app::services::AppServices;
use pricebook_infra::currency::{
    CurrencyApiConfig, CurrencyNormalizer, HttpRateSource, RateSource, TracingObserver,
};
use pricebook_infra::store::ProductStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pricebook_observability::init();

    let api_key = std::env::var("CURRENCY_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("CURRENCY_API_KEY not set; non-USD requests will fail upstream");
        String::new()
    });

    let mut config = CurrencyApiConfig::new(api_key);
    if let Ok(url) = std::env::var("CURRENCY_API_URL") {
        config.base_url = url;
    }

    let rate_source: Arc<dyn RateSource> = Arc::new(HttpRateSource::new(config));
    let normalizer =
        CurrencyNormalizer::new(rate_source).with_observer(Arc::new(TracingObserver));

    let services = Arc::new(AppServices::new(build_store()?, normalizer));
    let app = pricebook_api::app::build_app(services);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(not(feature = "redis"))]
fn build_store() -> anyhow::Result<Arc<dyn ProductStore>> {
    tracing::info!("using in-memory product store");
    Ok(Arc::new(pricebook_infra::store::InMemoryProductStore::new()))
}

#[cfg(feature = "redis")]
fn build_store() -> anyhow::Result<Arc<dyn ProductStore>> {
    let url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
    tracing::info!("using redis product store");
    Ok(Arc::new(pricebook_infra::store::RedisProductStore::connect(
        url,
    )?))
}
