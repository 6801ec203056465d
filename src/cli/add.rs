use crate::core::amortize;
use crate::core::liability::Liability;
use crate::store::LiabilityStore;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Display name; an existing liability with the same name is replaced
    pub name: String,

    /// Principal for long-term liabilities, flat amount otherwise
    #[arg(long)]
    pub amount: f64,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,

    /// Amortize between start and end dates instead of charging once
    #[arg(long)]
    pub long_term: bool,

    /// Annual nominal interest rate in percent
    #[arg(long, default_value_t = 0.0)]
    pub interest_rate: f64,

    /// End date (YYYY-MM-DD), required for long-term liabilities
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
}

/// Adds a liability to the account, replacing any record with the same name.
pub async fn run(store: &dyn LiabilityStore, account: &str, args: AddArgs) -> Result<()> {
    let mut liability = Liability {
        name: args.name,
        amount: args.amount,
        date: args.date,
        long_term: args.long_term,
        interest_rate: args.interest_rate,
        end_date: args.end_date,
        monthly_expense: 0.0,
    };

    // Reject malformed terms before anything touches the store.
    liability.validate()?;
    amortize::recompute(&mut liability, Local::now().date_naive())?;

    let mut liabilities = store.get(account).await?;
    let replaced = match liabilities
        .iter_mut()
        .find(|existing| existing.name == liability.name)
    {
        Some(existing) => {
            *existing = liability.clone();
            true
        }
        None => {
            liabilities.push(liability.clone());
            false
        }
    };
    store.put(account, &liabilities).await?;
    info!(name = %liability.name, account, replaced, "saved liability");

    let verb = if replaced { "Updated" } else { "Added" };
    if liability.long_term {
        println!(
            "{verb} {} with monthly expense {}",
            style(&liability.name).bold(),
            style(format!("{:.2}", liability.monthly_expense))
                .green()
                .bold()
        );
    } else {
        println!("{verb} {}", style(&liability.name).bold());
    }
    Ok(())
}
