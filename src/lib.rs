pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::rates::{BASE_CURRENCY, RateTable};
use crate::core::snapshot::FinancialSnapshot;
use anyhow::Result;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Summary,
    Breakdown,
    Upcoming,
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    currency: Option<&str>,
) -> Result<()> {
    info!("Net worth tracker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let display_currency = currency.unwrap_or(&config.currency);

    // A missing snapshot renders a zeroed dashboard instead of failing; the
    // aggregator is built to be safe before any data exists.
    let snapshot_path = config.snapshot_path()?;
    let snapshot = if snapshot_path.exists() {
        Some(FinancialSnapshot::load_from_path(&snapshot_path)?)
    } else {
        warn!(
            "No snapshot found at {}; run `nwt setup` to create one",
            snapshot_path.display()
        );
        None
    };

    let rates = resolve_rates(&config).await;

    let metrics = core::calculate_metrics(snapshot.as_ref(), display_currency, Some(&rates));

    match command {
        AppCommand::Summary => {
            cli::summary::run(&metrics, snapshot.as_ref(), display_currency);
        }
        AppCommand::Breakdown => {
            cli::breakdown::run(&metrics, display_currency);
        }
        AppCommand::Upcoming => {
            cli::upcoming::run(
                snapshot.as_ref().unwrap_or(&FinancialSnapshot::default()),
                display_currency,
                Some(&rates),
            );
        }
    }

    Ok(())
}

/// Builds the effective rate table: the static table from config, with live
/// rates merged on top when a provider is configured and reachable. A failed
/// fetch degrades to the static table with a warning; the dashboard still
/// renders.
async fn resolve_rates(config: &AppConfig) -> RateTable {
    use crate::providers::{ExchangeRateApiProvider, RateProvider};

    let mut rates = config.rates.clone();
    if let Some(provider_config) = &config.provider {
        let provider = ExchangeRateApiProvider::new(&provider_config.base_url);
        match provider.fetch_rates(BASE_CURRENCY).await {
            Ok(live) => {
                debug!("Merging {} live rates over the static table", live.len());
                rates.merge(live);
            }
            Err(e) => {
                warn!(error = %e, "Live rate fetch failed; falling back to static rates");
            }
        }
    }
    rates
}
