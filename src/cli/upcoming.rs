//! Upcoming installment payments and rent collections, soonest first.

use super::ui;
use crate::core::rates::{RateTable, convert};
use crate::core::snapshot::FinancialSnapshot;
use chrono::{NaiveDate, Utc};
use comfy_table::Cell;

fn days_left_cell(days: Option<i64>) -> Cell {
    ui::format_optional_cell(days, |d| {
        if d < 0 {
            format!("{} overdue", -d)
        } else {
            d.to_string()
        }
    })
}

fn installments_table(
    snapshot: &FinancialSnapshot,
    display_currency: &str,
    rates: Option<&RateTable>,
    today: NaiveDate,
) -> Option<String> {
    let mut payments: Vec<_> = snapshot.liabilities.installments.iter().collect();
    if payments.is_empty() {
        return None;
    }
    // Dated payments first, by due date; undated ones at the end
    payments.sort_by_key(|i| (i.next_due_date.is_none(), i.next_due_date));

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Installment"),
        ui::header_cell("Due Date"),
        ui::header_cell(&format!("Amount ({display_currency})")),
        ui::header_cell("Days Left"),
    ]);

    for installment in &payments {
        let amount = convert(
            installment.amount,
            &installment.currency,
            display_currency,
            rates,
        );
        let days_left = installment
            .next_due_date
            .map(|due| (due - today).num_days());

        table.add_row(vec![
            Cell::new(&installment.name),
            ui::format_optional_cell(installment.next_due_date, |d| d.to_string()),
            ui::money_cell(amount),
            days_left_cell(days_left),
        ]);
    }
    Some(table.to_string())
}

fn rents_table(
    snapshot: &FinancialSnapshot,
    display_currency: &str,
    rates: Option<&RateTable>,
    today: NaiveDate,
) -> Option<String> {
    let mut rents: Vec<_> = snapshot
        .assets
        .real_estate
        .iter()
        .filter(|a| a.monthly_rent > 0.0 && a.next_rent_due_date.is_some())
        .collect();
    if rents.is_empty() {
        return None;
    }
    rents.sort_by_key(|a| a.next_rent_due_date);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Property"),
        ui::header_cell("Rent Due"),
        ui::header_cell(&format!("Amount ({display_currency})")),
        ui::header_cell("Days Left"),
    ]);

    for asset in &rents {
        let rent_currency = asset.rent_currency.as_deref().unwrap_or(&asset.currency);
        let amount = convert(asset.monthly_rent, rent_currency, display_currency, rates);
        let days_left = asset
            .next_rent_due_date
            .map(|due| (due - today).num_days());

        table.add_row(vec![
            Cell::new(&asset.name),
            ui::format_optional_cell(asset.next_rent_due_date, |d| d.to_string()),
            ui::money_cell(amount),
            days_left_cell(days_left),
        ]);
    }
    Some(table.to_string())
}

pub fn render(
    snapshot: &FinancialSnapshot,
    display_currency: &str,
    rates: Option<&RateTable>,
    today: NaiveDate,
) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text("Upcoming Payments", ui::StyleType::Title)
    );

    let installments = installments_table(snapshot, display_currency, rates, today);
    let rents = rents_table(snapshot, display_currency, rates, today);

    match (installments, rents) {
        (None, None) => {
            output.push_str(&ui::style_text(
                "No upcoming payments scheduled.",
                ui::StyleType::Subtle,
            ));
        }
        (installments, rents) => {
            let sections: Vec<String> = installments.into_iter().chain(rents).collect();
            output.push_str(&sections.join("\n\n"));
        }
    }
    output
}

pub fn run(snapshot: &FinancialSnapshot, display_currency: &str, rates: Option<&RateTable>) {
    let today = Utc::now().date_naive();
    println!("{}", render(snapshot, display_currency, rates, today));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::snapshot::{Installment, RealEstateAsset};

    fn snapshot_with_installments() -> FinancialSnapshot {
        let mut snapshot = FinancialSnapshot::default();
        snapshot.liabilities.installments.push(Installment {
            name: "Dejoya".to_string(),
            amount: 4_750.0,
            next_due_date: NaiveDate::from_ymd_opt(2026, 10, 17),
            currency: "EGP".to_string(),
            ..Default::default()
        });
        snapshot.liabilities.installments.push(Installment {
            name: "Tycoon".to_string(),
            amount: 100.0,
            next_due_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            currency: "USD".to_string(),
            ..Default::default()
        });
        snapshot.liabilities.installments.push(Installment {
            name: "Undated".to_string(),
            amount: 10.0,
            next_due_date: None,
            currency: "USD".to_string(),
            ..Default::default()
        });
        snapshot
    }

    #[test]
    fn test_sorted_by_due_date_with_undated_last() {
        let rates = RateTable::from([("USD", 1.0), ("EGP", 47.5)]);
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let output = render(&snapshot_with_installments(), "USD", Some(&rates), today);

        let tycoon = output.find("Tycoon").unwrap();
        let dejoya = output.find("Dejoya").unwrap();
        let undated = output.find("Undated").unwrap();
        assert!(tycoon < dejoya && dejoya < undated);

        // 4750 EGP at 47.5 is 100 USD
        assert!(output.contains("100.00"));
        // Tycoon is due in 7 days
        assert!(output.contains('7'));
        assert!(output.contains("N/A"));
    }

    #[test]
    fn test_overdue_payment_is_flagged() {
        let mut snapshot = FinancialSnapshot::default();
        snapshot.liabilities.installments.push(Installment {
            name: "Late".to_string(),
            amount: 50.0,
            next_due_date: NaiveDate::from_ymd_opt(2026, 8, 20),
            currency: "USD".to_string(),
            ..Default::default()
        });

        let rates = RateTable::from([("USD", 1.0)]);
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let output = render(&snapshot, "USD", Some(&rates), today);
        assert!(output.contains("5 overdue"));
    }

    #[test]
    fn test_rent_collections_are_listed_with_days_left() {
        let mut snapshot = FinancialSnapshot::default();
        snapshot.assets.real_estate.push(RealEstateAsset {
            name: "Gardenia".to_string(),
            currency: "EGP".to_string(),
            monthly_rent: 4_750.0,
            next_rent_due_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            ..Default::default()
        });
        snapshot.assets.real_estate.push(RealEstateAsset {
            name: "Atakent".to_string(),
            currency: "TRY".to_string(),
            monthly_rent: 50.0,
            rent_currency: Some("USD".to_string()),
            next_rent_due_date: NaiveDate::from_ymd_opt(2026, 8, 20),
            ..Default::default()
        });
        // Not rented out; must not appear in the rents table
        snapshot.assets.real_estate.push(RealEstateAsset {
            name: "Vacant Plot".to_string(),
            currency: "USD".to_string(),
            ..Default::default()
        });

        let rates = RateTable::from([("USD", 1.0), ("EGP", 47.5)]);
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let output = render(&snapshot, "USD", Some(&rates), today);

        // Soonest rent first, even when it is already overdue
        let atakent = output.find("Atakent").unwrap();
        let gardenia = output.find("Gardenia").unwrap();
        assert!(atakent < gardenia);
        assert!(!output.contains("Vacant Plot"));

        // 4750 EGP at 47.5 is 100 USD; the Atakent rent is stated in USD
        assert!(output.contains("100.00"));
        assert!(output.contains("50.00"));
        assert!(output.contains("5 overdue"));
    }

    #[test]
    fn test_rents_render_alongside_installments() {
        let mut snapshot = snapshot_with_installments();
        snapshot.assets.real_estate.push(RealEstateAsset {
            name: "Gardenia".to_string(),
            currency: "USD".to_string(),
            monthly_rent: 25.0,
            next_rent_due_date: NaiveDate::from_ymd_opt(2026, 9, 5),
            ..Default::default()
        });

        let rates = RateTable::from([("USD", 1.0), ("EGP", 47.5)]);
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let output = render(&snapshot, "USD", Some(&rates), today);

        assert!(output.contains("Installment"));
        assert!(output.contains("Rent Due"));
        assert!(output.contains("Gardenia"));
        assert!(!output.contains("No upcoming payments scheduled."));
    }

    #[test]
    fn test_empty_snapshot_message() {
        let snapshot = FinancialSnapshot::default();
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let output = render(&snapshot, "USD", None, today);
        assert!(output.contains("No upcoming payments scheduled."));
    }
}
