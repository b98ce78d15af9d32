use super::source::CurrencyError;

/// Observational hook invoked around the external rate lookup.
///
/// Purely a telemetry side-channel: implementations must not affect control
/// flow, and correctness never depends on one being installed.
pub trait RateLookupObserver: Send + Sync {
    fn lookup_started(&self, _currency: &str) {}
    fn lookup_failed(&self, _currency: &str, _error: &CurrencyError) {}
    fn lookup_finished(&self, _currency: &str) {}
}

/// Default observer: does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RateLookupObserver for NoopObserver {}

/// Observer that annotates the lookup with tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RateLookupObserver for TracingObserver {
    fn lookup_started(&self, currency: &str) {
        tracing::info!(currency, "currency rate lookup started");
    }

    fn lookup_failed(&self, currency: &str, error: &CurrencyError) {
        tracing::error!(currency, error = %error, "currency rate lookup failed");
    }

    fn lookup_finished(&self, currency: &str) {
        tracing::debug!(currency, "currency rate lookup finished");
    }
}
