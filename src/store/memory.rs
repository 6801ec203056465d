use crate::core::Liability;
use crate::store::LiabilityStore;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory store implementation using HashMap and Mutex
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, Vec<Liability>>>>,
}

impl MemoryStore {
    /// Creates a new MemoryStore instance
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LiabilityStore for MemoryStore {
    async fn get(&self, account: &str) -> Result<Vec<Liability>> {
        let records = self.inner.lock().await;
        let liabilities = records.get(account).cloned().unwrap_or_default();
        debug!("Store GET for account: {account} ({} records)", liabilities.len());
        Ok(liabilities)
    }

    async fn put(&self, account: &str, liabilities: &[Liability]) -> Result<()> {
        let mut records = self.inner.lock().await;
        debug!("Store PUT for account: {account} ({} records)", liabilities.len());
        records.insert(account.to_string(), liabilities.to_vec());
        Ok(())
    }

    async fn remove(&self, account: &str) -> Result<bool> {
        let mut records = self.inner.lock().await;
        debug!("Store REMOVE for account: {account}");
        Ok(records.remove(account).is_some())
    }
}
