use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use super::RateProvider;
use crate::core::rates::RateTable;
use async_trait::async_trait;

/// Free FX endpoint serving `GET {base_url}/v4/latest/{base}`. It carries
/// currency rates only; metal spot prices come from the static table.
pub struct ExchangeRateApiProvider {
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(
        name = "FxRateFetch",
        skip(self),
        fields(base = %base)
    )]
    async fn fetch_rates(&self, base: &str) -> Result<RateTable> {
        let url = format!("{}/v4/latest/{}", self.base_url, base);
        debug!("Fetching exchange rates from {url}");

        let response = reqwest::get(&url)
            .await
            .with_context(|| format!("Failed to fetch exchange rates from {url}"))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Exchange rate request failed with status {}",
                response.status()
            ));
        }

        let parsed: LatestRatesResponse = response
            .json()
            .await
            .context("Failed to parse exchange rate response")?;

        if parsed.rates.is_empty() {
            return Err(anyhow!("Exchange rate response contained no rates"));
        }

        let mut table: RateTable = parsed.rates.into_iter().collect();
        // The endpoint sometimes omits the base itself; pin the anchor
        table.insert(base, 1.0);

        debug!("Fetched {} rates anchored to {base}", table.len());
        Ok(table)
    }
}
