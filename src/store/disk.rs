use crate::core::Liability;
use crate::store::LiabilityStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle};
use std::path::Path;
use tracing::debug;

/// On-disk store backed by a fjall keyspace.
///
/// Each account maps to one record: its liabilities serialized as JSON.
pub struct FjallStore {
    // Keyspace owns the partition handle's backing files.
    _keyspace: Keyspace,
    partition: PartitionHandle,
}

impl FjallStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create data directory: {}", path.display()))?;

        let keyspace = fjall::Config::new(path)
            .open()
            .with_context(|| format!("Failed to open data store at {}", path.display()))?;
        let partition = keyspace
            .open_partition("liabilities", PartitionCreateOptions::default())
            .context("Failed to open liabilities partition")?;

        Ok(Self {
            _keyspace: keyspace,
            partition,
        })
    }
}

#[async_trait]
impl LiabilityStore for FjallStore {
    async fn get(&self, account: &str) -> Result<Vec<Liability>> {
        match self.partition.get(account.as_bytes())? {
            Some(raw) => {
                let liabilities: Vec<Liability> = serde_json::from_slice(&raw)
                    .with_context(|| format!("Corrupt record for account {account}"))?;
                debug!("Store GET for account: {account} ({} records)", liabilities.len());
                Ok(liabilities)
            }
            None => {
                debug!("Store GET for account: {account} (no record)");
                Ok(Vec::new())
            }
        }
    }

    async fn put(&self, account: &str, liabilities: &[Liability]) -> Result<()> {
        self.partition
            .insert(account.as_bytes(), serde_json::to_vec(liabilities)?)?;
        debug!("Store PUT for account: {account} ({} records)", liabilities.len());
        Ok(())
    }

    async fn remove(&self, account: &str) -> Result<bool> {
        let existed = self.partition.get(account.as_bytes())?.is_some();
        self.partition.remove(account.as_bytes())?;
        debug!("Store REMOVE for account: {account} (existed: {existed})");
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_disk_store_get_put() {
        let dir = tempdir().unwrap();
        let store = FjallStore::open(dir.path()).unwrap();

        assert!(store.get("personal").await.unwrap().is_empty());

        let liability =
            Liability::long_term("Car loan", 12000.0, date(2024, 1, 1), date(2026, 1, 1), 5.0);
        store
            .put("personal", std::slice::from_ref(&liability))
            .await
            .unwrap();

        let records = store.get("personal").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], liability);
    }

    #[tokio::test]
    async fn test_disk_store_survives_reopen() {
        let dir = tempdir().unwrap();
        let liability = Liability::flat("Repair", 250.0, date(2024, 5, 10));

        {
            let store = FjallStore::open(dir.path()).unwrap();
            store
                .put("personal", std::slice::from_ref(&liability))
                .await
                .unwrap();
        }

        let store = FjallStore::open(dir.path()).unwrap();
        let records = store.get("personal").await.unwrap();
        assert_eq!(records, vec![liability]);
    }

    #[tokio::test]
    async fn test_disk_store_remove() {
        let dir = tempdir().unwrap();
        let store = FjallStore::open(dir.path()).unwrap();

        store
            .put("personal", &[Liability::flat("Rent", 900.0, date(2024, 2, 1))])
            .await
            .unwrap();

        assert!(store.remove("personal").await.unwrap());
        assert!(store.get("personal").await.unwrap().is_empty());
        assert!(!store.remove("personal").await.unwrap());
    }
}
