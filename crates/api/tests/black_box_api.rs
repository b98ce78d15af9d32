use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

use pricebook_api::app::{build_app, services::AppServices};
use pricebook_infra::currency::{CurrencyError, CurrencyNormalizer, RateSource, RateTable};
use pricebook_infra::store::InMemoryProductStore;

/// Rate source double with a fixed table and a call counter, so tests can
/// assert that USD requests never hit the external dependency.
struct StaticRateSource {
    rates: RateTable,
    calls: AtomicUsize,
}

#[async_trait]
impl RateSource for StaticRateSource {
    async fn latest_rates(&self) -> Result<RateTable, CurrencyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rates.clone())
    }
}

struct TestServer {
    base_url: String,
    store: Arc<InMemoryProductStore>,
    rate_source: Arc<StaticRateSource>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(rates: &[(&str, f64)]) -> Self {
        let store = Arc::new(InMemoryProductStore::new());
        let rate_source = Arc::new(StaticRateSource {
            rates: rates
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
            calls: AtomicUsize::new(0),
        });

        let normalizer = CurrencyNormalizer::new(rate_source.clone());
        let services = Arc::new(AppServices::new(store.clone(), normalizer));

        // Same router as prod, bound to an ephemeral port.
        let app = build_app(services);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            store,
            rate_source,
            handle,
        }
    }

    fn lookups(&self) -> usize {
        self.rate_source.calls.load(Ordering::SeqCst)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn post_product(srv: &TestServer, body: impl ToString) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/products", srv.base_url))
        .body(body.to_string())
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn usd_price_passes_through_unchanged() {
    let srv = TestServer::spawn(&[("EUR", 0.9)]).await;

    let res = post_product(
        &srv,
        json!({"name": "Widget", "price": {"value": 100, "currency": "USD"}}),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["price"], 100.0);
    assert!(!body["id"].as_str().unwrap().is_empty());

    // USD never triggers the external lookup.
    assert_eq!(srv.lookups(), 0);
    assert_eq!(srv.store.len(), 1);
}

#[tokio::test]
async fn foreign_price_is_divided_by_the_rate() {
    let srv = TestServer::spawn(&[("EUR", 0.9)]).await;

    let res = post_product(
        &srv,
        json!({"name": "Widget", "price": {"value": 90, "currency": "EUR"}}),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let price = body["price"].as_f64().unwrap();
    assert!((price - 100.0).abs() < 1e-9);
    assert_eq!(srv.lookups(), 1);

    // The persisted record carries the normalized USD price.
    let id = body["id"].as_str().unwrap().parse().unwrap();
    let stored = srv.store.get(&id).unwrap();
    assert!((stored.price - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn unknown_currency_is_internal_error_and_persists_nothing() {
    let srv = TestServer::spawn(&[("EUR", 0.9)]).await;

    let res = post_product(
        &srv,
        json!({"name": "Widget", "price": {"value": 50, "currency": "GBP"}}),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text().await.unwrap(), "Internal error");
    assert!(srv.store.is_empty());
}

#[tokio::test]
async fn empty_body_is_unprocessable() {
    let srv = TestServer::spawn(&[]).await;

    let res = post_product(&srv, "").await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.text().await.unwrap(), "Empty body");
    assert!(srv.store.is_empty());
}

#[tokio::test]
async fn validation_failures_name_the_missing_field() {
    let srv = TestServer::spawn(&[]).await;

    let cases = [
        (
            json!({"price": {"value": 1, "currency": "USD"}}),
            "Bad request, no name provided",
        ),
        (json!({"name": "Widget"}), "Bad request, no price provided"),
        (
            json!({"name": "Widget", "price": {"currency": "USD"}}),
            "Bad request, no price value provided",
        ),
        (
            json!({"name": "Widget", "price": {"value": "1", "currency": "USD"}}),
            "Bad request, price value must be a number",
        ),
        (
            json!({"name": "Widget", "price": {"value": 1}}),
            "Bad request, no price currency provided",
        ),
    ];

    for (body, expected) in cases {
        let res = post_product(&srv, body).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(res.text().await.unwrap(), expected);
    }

    // Hard stops: nothing reached the store.
    assert!(srv.store.is_empty());
}

#[tokio::test]
async fn unparseable_body_is_bad_request() {
    let srv = TestServer::spawn(&[]).await;

    let res = post_product(&srv, "{not json").await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(srv.store.is_empty());
}

#[tokio::test]
async fn ids_are_generated_and_unique() {
    let srv = TestServer::spawn(&[]).await;
    let body = json!({"name": "Widget", "price": {"value": 5, "currency": "USD"}});

    let first: serde_json::Value = post_product(&srv, &body).await.json().await.unwrap();
    let second: serde_json::Value = post_product(&srv, &body).await.json().await.unwrap();

    assert_ne!(first["id"], second["id"]);
    assert_eq!(srv.store.len(), 2);
}

#[tokio::test]
async fn caller_supplied_id_is_ignored() {
    let srv = TestServer::spawn(&[]).await;

    let res = post_product(
        &srv,
        json!({"id": "caller-chosen", "name": "Widget", "price": {"value": 5, "currency": "USD"}}),
    )
    .await;

    let body: serde_json::Value = res.json().await.unwrap();
    assert_ne!(body["id"], "caller-chosen");
}

#[tokio::test]
async fn non_create_methods_are_not_found() {
    let srv = TestServer::spawn(&[]).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/products", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "Resource not found");

    let res = client
        .delete(format!("{}/nowhere", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "Resource not found");
}

#[tokio::test]
async fn health_endpoint_responds() {
    let srv = TestServer::spawn(&[]).await;

    let res = reqwest::Client::new()
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}
