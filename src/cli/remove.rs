use crate::store::LiabilityStore;
use anyhow::Result;
use console::style;
use tracing::info;

/// Removes a liability from the account by name.
pub async fn run(store: &dyn LiabilityStore, account: &str, name: &str) -> Result<()> {
    let mut liabilities = store.get(account).await?;
    let before = liabilities.len();
    liabilities.retain(|liability| liability.name != name);

    if liabilities.len() == before {
        anyhow::bail!("No liability named {name} in account {account}");
    }

    store.put(account, &liabilities).await?;
    info!(name, account, "removed liability");
    println!("Removed {}", style(name).bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Liability;
    use crate::store::memory::MemoryStore;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_remove_deletes_only_the_named_record() {
        let store = MemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        store
            .put(
                "personal",
                &[
                    Liability::flat("Rent", 900.0, date),
                    Liability::flat("Insurance", 120.0, date),
                ],
            )
            .await
            .unwrap();

        run(&store, "personal", "Rent").await.unwrap();

        let records = store.get("personal").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Insurance");
    }

    #[tokio::test]
    async fn test_remove_unknown_name_fails() {
        let store = MemoryStore::new();
        assert!(run(&store, "personal", "Ghost").await.is_err());
    }
}
