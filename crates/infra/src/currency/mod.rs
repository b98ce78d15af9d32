//! Exchange-rate boundary and USD price normalization.
//!
//! A [`RateSource`] yields the current rate table ("units of currency per
//! one USD"); the [`CurrencyNormalizer`] turns a foreign-denominated price
//! into USD with a single lookup. No caching, no retry.

pub mod normalizer;
pub mod observer;
pub mod source;

pub use normalizer::{CurrencyNormalizer, USD};
pub use observer::{NoopObserver, RateLookupObserver, TracingObserver};
pub use source::{CurrencyApiConfig, CurrencyError, HttpRateSource, RateSource, RateTable};
