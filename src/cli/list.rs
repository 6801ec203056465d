use super::ui;
use crate::store::LiabilityStore;
use anyhow::Result;
use comfy_table::Cell;

/// Tabulates the liabilities recorded for the account.
pub async fn run(store: &dyn LiabilityStore, account: &str) -> Result<()> {
    let liabilities = store.get(account).await?;
    if liabilities.is_empty() {
        println!("No liabilities recorded for account {account}.");
        return Ok(());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Name"),
        ui::header_cell("Amount"),
        ui::header_cell("Start"),
        ui::header_cell("End"),
        ui::header_cell("Rate (%)"),
        ui::header_cell("Monthly"),
    ]);

    for liability in &liabilities {
        let end = liability
            .end_date
            .map_or(ui::na_cell(false), |date| Cell::new(date.to_string()));
        let (rate, monthly) = if liability.long_term {
            (
                ui::money_cell(liability.interest_rate),
                ui::money_cell(liability.monthly_expense),
            )
        } else {
            (ui::na_cell(false), ui::na_cell(false))
        };

        table.add_row(vec![
            Cell::new(&liability.name),
            ui::money_cell(liability.amount),
            Cell::new(liability.date.to_string()),
            end,
            rate,
            monthly,
        ]);
    }

    println!(
        "Account: {}\n\n{table}",
        ui::style_text(account, ui::StyleType::Title)
    );
    Ok(())
}
