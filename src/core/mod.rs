//! Core business logic: the pure valuation and aggregation engine.

pub mod config;
pub mod log;
pub mod metrics;
pub mod rates;
pub mod snapshot;

// Re-export main types for cleaner imports
pub use metrics::{MetricsRecord, calculate_metrics};
pub use rates::{BASE_CURRENCY, RateTable, convert};
pub use snapshot::FinancialSnapshot;
