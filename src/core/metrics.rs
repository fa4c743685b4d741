//! Pure metrics aggregation over a financial snapshot.
//!
//! [`calculate_metrics`] walks every line item in a snapshot, converts it to
//! the display currency and sums it into category buckets. It holds no state
//! and caches nothing; callers recompute whenever the snapshot, the rate
//! table or the display currency changes. It never fails: missing input
//! produces a zeroed record so a dashboard can always render.

use crate::core::rates::{GOLD_GRAM, RateTable, SILVER_GRAM, convert};
use crate::core::snapshot::{FinancialSnapshot, InstallmentFrequency, RentFrequency};
use serde::Serialize;

/// Converted value of each asset category in the display currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AssetBreakdown {
    pub existing_real_estate: f64,
    pub off_plan_real_estate: f64,
    pub cash: f64,
    pub gold: f64,
    pub silver: f64,
    pub other: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LiabilityBreakdown {
    pub loans: f64,
    pub installments: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IncomeBreakdown {
    pub salary: f64,
    pub rent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExpenseBreakdown {
    pub loans: f64,
    pub household: f64,
    /// Non-monthly installment payments spread into an average monthly cost.
    pub installments_avg: f64,
}

/// The aggregator's output: converted, summed, categorized totals for one
/// display currency. Plain data, safe to render or serialize directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricsRecord {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_cash_flow: f64,
    pub assets: AssetBreakdown,
    pub liabilities: LiabilityBreakdown,
    pub income: IncomeBreakdown,
    pub expenses: ExpenseBreakdown,
}

/// Computes the full metrics record for a snapshot in `display_currency`.
///
/// `None` for the snapshot (nothing loaded yet) or for the rate table (rates
/// not fetched yet) short-circuits to zeros instead of failing; partial or
/// stale numbers beat a crashed render on a dashboard.
pub fn calculate_metrics(
    snapshot: Option<&FinancialSnapshot>,
    display_currency: &str,
    rates: Option<&RateTable>,
) -> MetricsRecord {
    let Some(snapshot) = snapshot else {
        return MetricsRecord::default();
    };

    let assets = &snapshot.assets;
    let liabilities = &snapshot.liabilities;

    let existing_real_estate = assets
        .real_estate
        .iter()
        .map(|a| convert(a.current_value, &a.currency, display_currency, rates))
        .sum::<f64>();

    // Off-plan holdings have no market price; they are valued at twice the
    // amount paid toward the project, in the item's native currency. The
    // nominal current_value is deliberately ignored here.
    let off_plan_real_estate = assets
        .under_development
        .iter()
        .map(|a| convert(2.0 * a.amount_paid, &a.currency, display_currency, rates))
        .sum::<f64>();

    let cash = assets
        .cash
        .iter()
        .map(|c| convert(c.amount, &c.currency, display_currency, rates))
        .sum::<f64>();

    let gold = assets
        .gold
        .iter()
        .map(|h| convert(h.grams, GOLD_GRAM, display_currency, rates))
        .sum::<f64>();

    let silver = assets
        .silver
        .iter()
        .map(|h| convert(h.grams, SILVER_GRAM, display_currency, rates))
        .sum::<f64>();

    let other = assets
        .other
        .iter()
        .map(|o| convert(o.value, &o.currency, display_currency, rates))
        .sum::<f64>();

    let asset_breakdown = AssetBreakdown {
        existing_real_estate,
        off_plan_real_estate,
        cash,
        gold,
        silver,
        other,
    };
    let total_assets =
        existing_real_estate + off_plan_real_estate + cash + gold + silver + other;

    let loans = liabilities
        .loans
        .iter()
        .map(|l| convert(l.remaining, &l.currency, display_currency, rates))
        .sum::<f64>();

    let installments = liabilities
        .installments
        .iter()
        .map(|i| convert(i.total - i.paid, &i.currency, display_currency, rates))
        .sum::<f64>();

    let liability_breakdown = LiabilityBreakdown { loans, installments };
    let total_liabilities = loans + installments;

    let salary_income = convert(
        assets.salary.amount,
        &assets.salary.currency,
        display_currency,
        rates,
    );

    // Rent is normalized to a monthly figure: convert the stated amount
    // first, then divide for non-monthly collection.
    let rent_income = assets
        .real_estate
        .iter()
        .map(|a| {
            let rent_currency = a.rent_currency.as_deref().unwrap_or(&a.currency);
            let monthly = convert(a.monthly_rent, rent_currency, display_currency, rates);
            match a.rent_frequency {
                RentFrequency::SemiAnnual => monthly / 6.0,
                RentFrequency::Monthly => monthly,
            }
        })
        .sum::<f64>();

    let income_breakdown = IncomeBreakdown {
        salary: salary_income,
        rent: rent_income,
    };
    let total_income = salary_income + rent_income;

    let loan_expenses = liabilities
        .loans
        .iter()
        .map(|l| convert(l.monthly_payment, &l.currency, display_currency, rates))
        .sum::<f64>();

    let household_expenses = snapshot
        .monthly_expenses
        .household
        .iter()
        .map(|e| convert(e.amount, &e.currency, display_currency, rates))
        .sum::<f64>();

    // Same order of operations as rent: convert the stated installment
    // amount, then spread it across the months it covers.
    let installments_avg = liabilities
        .installments
        .iter()
        .map(|i| {
            let converted = convert(i.amount, &i.currency, display_currency, rates);
            match i.frequency {
                InstallmentFrequency::Annual => converted / 12.0,
                InstallmentFrequency::SemiAnnual => converted / 6.0,
                InstallmentFrequency::Quarterly => converted / 3.0,
                InstallmentFrequency::Monthly => converted,
            }
        })
        .sum::<f64>();

    let expense_breakdown = ExpenseBreakdown {
        loans: loan_expenses,
        household: household_expenses,
        installments_avg,
    };
    let total_expenses = loan_expenses + household_expenses + installments_avg;

    MetricsRecord {
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
        total_income,
        total_expenses,
        net_cash_flow: total_income - total_expenses,
        assets: asset_breakdown,
        liabilities: liability_breakdown,
        income: income_breakdown,
        expenses: expense_breakdown,
    }
}
