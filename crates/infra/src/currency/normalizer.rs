use std::sync::Arc;

use super::observer::{NoopObserver, RateLookupObserver};
use super::source::{CurrencyError, RateSource};

/// The canonical denomination. Matching is exact and case-sensitive.
pub const USD: &str = "USD";

/// Converts a foreign-denominated price into USD.
///
/// USD input passes through untouched without any lookup; everything else
/// costs exactly one outbound call to the rate source.
pub struct CurrencyNormalizer {
    source: Arc<dyn RateSource>,
    observer: Arc<dyn RateLookupObserver>,
}

impl CurrencyNormalizer {
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self {
            source,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Install a telemetry observer around the rate lookup.
    pub fn with_observer(mut self, observer: Arc<dyn RateLookupObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Convert `value` denominated in `currency` into USD.
    ///
    /// The rate table maps currency code to units-per-USD, so conversion
    /// divides: `usd = value / rate[currency]`.
    pub async fn to_usd(&self, currency: &str, value: f64) -> Result<f64, CurrencyError> {
        if currency == USD {
            return Ok(value);
        }

        self.observer.lookup_started(currency);

        let rates = match self.source.latest_rates().await {
            Ok(rates) => rates,
            Err(e) => {
                self.observer.lookup_failed(currency, &e);
                return Err(e);
            }
        };

        let result = match rates.get(currency) {
            Some(rate) => Ok(value / rate),
            None => Err(CurrencyError::UnknownCurrency(currency.to_string())),
        };

        match &result {
            Ok(_) => self.observer.lookup_finished(currency),
            Err(e) => self.observer.lookup_failed(currency, e),
        }

        result
    }
}
