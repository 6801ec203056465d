use super::ui;
use crate::core::amortize;
use crate::core::schedule::build_schedule;
use crate::store::LiabilityStore;
use anyhow::Result;
use chrono::Local;
use comfy_table::Cell;
use console::style;

const CHART_WIDTH: usize = 40;

/// Renders the month-by-month expense schedule for the account.
pub async fn run(store: &dyn LiabilityStore, account: &str) -> Result<()> {
    let mut liabilities = store.get(account).await?;
    if liabilities.is_empty() {
        println!("No liabilities recorded for account {account}.");
        return Ok(());
    }

    // Refresh cached monthly figures against the current terms, then expand.
    // The snapshot is local to this call; nothing is written back.
    let reference = Local::now().date_naive();
    for liability in &mut liabilities {
        amortize::recompute(liability, reference)?;
    }
    let schedule = build_schedule(&liabilities)?;

    let mut detail = ui::new_styled_table();
    detail.set_header(vec![
        ui::header_cell("Month"),
        ui::header_cell("Liability"),
        ui::header_cell("Amount"),
        ui::header_cell("Due"),
        ui::header_cell("Until"),
    ]);
    for (month, entries) in schedule.detail.iter() {
        for (index, entry) in entries.iter().enumerate() {
            let month_cell = if index == 0 {
                Cell::new(month)
            } else {
                Cell::new("")
            };
            let until = entry
                .end_date
                .map_or(ui::na_cell(false), |date| Cell::new(date.to_string()));
            detail.add_row(vec![
                month_cell,
                Cell::new(&entry.name),
                ui::money_cell(entry.amount),
                Cell::new(entry.date.to_string()),
                until,
            ]);
        }
    }

    println!(
        "Expenses: {}\n\n{detail}",
        ui::style_text(account, ui::StyleType::Title)
    );
    ui::print_separator();

    let (months, expenses) = schedule.chart_series();
    let max = expenses.iter().cloned().fold(0.0, f64::max);

    let mut chart = ui::new_styled_table();
    chart.set_header(vec![
        ui::header_cell("Month"),
        ui::header_cell("Total"),
        ui::header_cell("Monthly Expenses"),
    ]);
    for (month, total) in months.iter().zip(&expenses) {
        chart.add_row(vec![
            Cell::new(month),
            ui::money_cell(*total),
            ui::bar_cell(*total, max, CHART_WIDTH),
        ]);
    }
    println!("{chart}");

    let grand_total: f64 = expenses.iter().sum();
    let total_str = format!("Total scheduled: {grand_total:.2}");
    println!("\n{}", style(&total_str).bold().green());

    Ok(())
}
