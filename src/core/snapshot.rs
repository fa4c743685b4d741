//! The financial snapshot data model.
//!
//! A snapshot is the full picture of a user's holdings at a point in time:
//! assets, liabilities and recurring monthly expenses. Every monetary field
//! carries its own currency tag; nothing is assumed to be in the display
//! currency. All collections and numeric fields default when absent from the
//! file, so a structurally incomplete snapshot still deserializes and the
//! aggregator never has to null-check individual fields.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialSnapshot {
    pub assets: Assets,
    pub liabilities: Liabilities,
    pub monthly_expenses: MonthlyExpenses,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assets {
    pub real_estate: Vec<RealEstateAsset>,
    pub under_development: Vec<UnderDevelopmentAsset>,
    pub cash: Vec<CashHolding>,
    pub gold: Vec<MetalHolding>,
    pub silver: Vec<MetalHolding>,
    pub other: Vec<OtherAsset>,
    pub salary: Salary,
}

/// An existing, market-valued property, optionally rented out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealEstateAsset {
    pub name: String,
    pub current_value: f64,
    pub currency: String,
    pub monthly_rent: f64,
    /// Currency of the rent when it differs from the property currency.
    pub rent_currency: Option<String>,
    pub rent_frequency: RentFrequency,
    /// When the next rent collection is expected, for rented-out properties.
    pub next_rent_due_date: Option<NaiveDate>,
}

/// An off-plan property still under construction. It has no market price
/// yet; `amount_paid` toward the project drives its valuation, while
/// `current_value` is only the developer's nominal project price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnderDevelopmentAsset {
    pub name: String,
    pub amount_paid: f64,
    pub current_value: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashHolding {
    pub location: String,
    pub amount: f64,
    pub currency: String,
}

/// Precious metal held by weight. Whether it is gold or silver follows from
/// the collection it sits in, not from a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetalHolding {
    pub name: String,
    pub grams: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherAsset {
    pub name: String,
    pub value: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Salary {
    pub amount: f64,
    pub currency: String,
}

/// How often rent is collected. Anything unrecognized degrades to monthly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RentFrequency {
    #[default]
    Monthly,
    SemiAnnual,
}

impl From<String> for RentFrequency {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "semi-annual" | "semiannual" => RentFrequency::SemiAnnual,
            _ => RentFrequency::Monthly,
        }
    }
}

impl From<RentFrequency> for String {
    fn from(freq: RentFrequency) -> Self {
        match freq {
            RentFrequency::Monthly => "monthly".to_string(),
            RentFrequency::SemiAnnual => "semi-annual".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Liabilities {
    pub loans: Vec<Loan>,
    pub installments: Vec<Installment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Loan {
    pub name: String,
    pub principal: f64,
    pub remaining: f64,
    pub monthly_payment: f64,
    pub currency: String,
}

/// A project paid off in recurring installments. `paid` may lag or, after a
/// data-entry mistake, exceed `total`; the model does not police it, the
/// display layer clamps progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Installment {
    pub name: String,
    pub total: f64,
    pub paid: f64,
    /// Amount of each recurring payment, at `frequency`.
    pub amount: f64,
    pub frequency: InstallmentFrequency,
    pub next_due_date: Option<NaiveDate>,
    pub currency: String,
}

/// Cadence of an installment plan's recurring payment. Anything
/// unrecognized degrades to monthly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstallmentFrequency {
    #[default]
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl From<String> for InstallmentFrequency {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "quarterly" => InstallmentFrequency::Quarterly,
            "semi-annual" | "semiannual" => InstallmentFrequency::SemiAnnual,
            "annual" => InstallmentFrequency::Annual,
            _ => InstallmentFrequency::Monthly,
        }
    }
}

impl From<InstallmentFrequency> for String {
    fn from(freq: InstallmentFrequency) -> Self {
        match freq {
            InstallmentFrequency::Monthly => "Monthly".to_string(),
            InstallmentFrequency::Quarterly => "Quarterly".to_string(),
            InstallmentFrequency::SemiAnnual => "Semi-Annual".to_string(),
            InstallmentFrequency::Annual => "Annual".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyExpenses {
    pub household: Vec<ExpenseItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseItem {
    pub name: String,
    pub amount: f64,
    pub currency: String,
}

impl FinancialSnapshot {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let snapshot_str = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read snapshot file: {}", path.as_ref().display())
        })?;

        let snapshot: Self = serde_yaml::from_str(&snapshot_str).with_context(|| {
            format!("Failed to parse snapshot file: {}", path.as_ref().display())
        })?;
        debug!("Successfully loaded snapshot");
        Ok(snapshot)
    }
}
