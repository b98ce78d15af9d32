use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Mapping of currency code to its rate, expressed as units of that
/// currency per one USD (i.e. the rate is a divisor).
pub type RateTable = HashMap<String, f64>;

/// Currency conversion error.
///
/// All variants belong to the same "conversion unavailable" class: the
/// caller must not persist a record when any of them occurs. The underlying
/// transport error stays attached for diagnostics.
#[derive(Debug, Error)]
pub enum CurrencyError {
    /// The outbound rate lookup failed (network error, non-success status,
    /// unparseable body).
    #[error("rate lookup failed")]
    Lookup(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response parsed but did not carry the expected structure.
    #[error("malformed rate response: {0}")]
    MalformedResponse(String),

    /// The rate table carries no entry for the requested currency.
    #[error("no rate available for currency {0}")]
    UnknownCurrency(String),
}

impl CurrencyError {
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Box::new(err))
    }
}

/// Live exchange-rate data source.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetch the current rate table. One outbound call per invocation.
    async fn latest_rates(&self) -> Result<RateTable, CurrencyError>;
}

/// Configuration for the hosted currency API.
#[derive(Debug, Clone)]
pub struct CurrencyApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl CurrencyApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.freecurrencyapi.com/v1/latest";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }
}

/// Expected response shape: `{ "data": { "<code>": <rate>, ... } }`.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    data: Option<RateTable>,
}

/// Rate source backed by the hosted currency API over HTTP.
pub struct HttpRateSource {
    client: reqwest::Client,
    config: CurrencyApiConfig,
}

impl HttpRateSource {
    pub fn new(config: CurrencyApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn latest_rates(&self) -> Result<RateTable, CurrencyError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("apikey", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(CurrencyError::lookup)?
            .error_for_status()
            .map_err(CurrencyError::lookup)?;

        let body: RatesResponse = response.json().await.map_err(CurrencyError::lookup)?;

        body.data
            .ok_or_else(|| CurrencyError::MalformedResponse("missing `data` field".to_string()))
    }
}
