//! Asset allocation breakdown with per-category weights.

use super::ui;
use crate::core::metrics::MetricsRecord;
use comfy_table::Cell;

pub fn render(metrics: &MetricsRecord, display_currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Category"),
        ui::header_cell(&format!("Value ({display_currency})")),
        ui::header_cell("Weight (%)"),
    ]);

    let assets = &metrics.assets;
    let total = metrics.total_assets;
    for (label, value) in [
        ("Real Estate", assets.existing_real_estate),
        ("Off-Plan Real Estate", assets.off_plan_real_estate),
        ("Cash", assets.cash),
        ("Gold", assets.gold),
        ("Silver", assets.silver),
        ("Other", assets.other),
    ] {
        let weight = if total > 0.0 {
            Some((value / total) * 100.0)
        } else {
            None
        };
        table.add_row(vec![
            Cell::new(label),
            ui::money_cell(value),
            ui::format_optional_cell(weight, |w| format!("{w:.2}%")),
        ]);
    }

    format!(
        "{}\n\n{}\n\nTotal Assets ({}): {}",
        ui::style_text("Asset Allocation", ui::StyleType::Title),
        table,
        ui::style_text(display_currency, ui::StyleType::TotalLabel),
        ui::style_text(&ui::money(total), ui::StyleType::TotalValue)
    )
}

pub fn run(metrics: &MetricsRecord, display_currency: &str) {
    println!("{}", render(metrics, display_currency));
}
