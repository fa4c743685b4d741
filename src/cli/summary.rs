//! The dashboard summary: headline totals plus category tables.

use super::ui;
use crate::core::metrics::MetricsRecord;
use crate::core::snapshot::FinancialSnapshot;
use comfy_table::Cell;

fn assets_table(metrics: &MetricsRecord, display_currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Assets"),
        ui::header_cell(&format!("Value ({display_currency})")),
    ]);

    let assets = &metrics.assets;
    for (label, value) in [
        ("Real Estate", assets.existing_real_estate),
        ("Off-Plan Real Estate", assets.off_plan_real_estate),
        ("Cash", assets.cash),
        ("Gold", assets.gold),
        ("Silver", assets.silver),
        ("Other", assets.other),
    ] {
        table.add_row(vec![Cell::new(label), ui::money_cell(value)]);
    }
    table.add_row(vec![
        Cell::new("Total"),
        ui::money_cell(metrics.total_assets),
    ]);
    table.to_string()
}

fn liabilities_table(metrics: &MetricsRecord, display_currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Liabilities"),
        ui::header_cell(&format!("Value ({display_currency})")),
    ]);

    let liabilities = &metrics.liabilities;
    for (label, value) in [
        ("Loans", liabilities.loans),
        ("Installments Remaining", liabilities.installments),
    ] {
        table.add_row(vec![Cell::new(label), ui::money_cell(value)]);
    }
    table.add_row(vec![
        Cell::new("Total"),
        ui::money_cell(metrics.total_liabilities),
    ]);
    table.to_string()
}

fn cash_flow_table(metrics: &MetricsRecord, display_currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Monthly Cash Flow"),
        ui::header_cell(&format!("Amount ({display_currency})")),
    ]);

    for (label, value) in [
        ("Salary", metrics.income.salary),
        ("Rent Income", metrics.income.rent),
        ("Loan Payments", -metrics.expenses.loans),
        ("Household", -metrics.expenses.household),
        ("Installments (avg)", -metrics.expenses.installments_avg),
    ] {
        table.add_row(vec![Cell::new(label), ui::money_cell(value)]);
    }
    table.add_row(vec![
        Cell::new("Net"),
        ui::signed_money_cell(metrics.net_cash_flow),
    ]);
    table.to_string()
}

pub fn render(
    metrics: &MetricsRecord,
    snapshot: Option<&FinancialSnapshot>,
    display_currency: &str,
) -> String {
    let net_worth_style = if metrics.net_worth >= 0.0 {
        ui::StyleType::TotalValue
    } else {
        ui::StyleType::Error
    };

    let mut output = format!(
        "{}\n\nNet Worth ({}): {}\n\n",
        ui::style_text("Wealth Summary", ui::StyleType::Title),
        ui::style_text(display_currency, ui::StyleType::TotalLabel),
        ui::style_text(&ui::money(metrics.net_worth), net_worth_style)
    );

    output.push_str(&assets_table(metrics, display_currency));
    output.push_str("\n\n");
    output.push_str(&liabilities_table(metrics, display_currency));
    output.push_str("\n\n");
    output.push_str(&cash_flow_table(metrics, display_currency));

    if let Some(last_updated) = snapshot.and_then(|s| s.last_updated) {
        output.push_str(&format!(
            "\n\n{}",
            ui::style_text(
                &format!("Last updated: {}", last_updated.format("%Y-%m-%d %H:%M UTC")),
                ui::StyleType::Subtle
            )
        ));
    }

    output
}

pub fn run(
    metrics: &MetricsRecord,
    snapshot: Option<&FinancialSnapshot>,
    display_currency: &str,
) {
    println!("{}", render(metrics, snapshot, display_currency));
}
