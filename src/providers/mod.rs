//! Live exchange rate providers.

pub mod exchange_rate_api;

use crate::core::rates::RateTable;
use anyhow::Result;
use async_trait::async_trait;

pub use exchange_rate_api::ExchangeRateApiProvider;

/// Fetches a full rate table anchored to `base`. How the table was obtained
/// is the provider's business; the engine only ever sees the table.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self, base: &str) -> Result<RateTable>;
}
