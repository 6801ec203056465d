//! Persistence for liability records.

pub mod disk;
pub mod memory;

use crate::core::Liability;
use anyhow::Result;
use async_trait::async_trait;

/// A record store holding each account's liabilities under a single key.
///
/// The engine never talks to the store directly; commands load a snapshot,
/// run the pure core over it, and put the updated records back.
#[async_trait]
pub trait LiabilityStore: Send + Sync {
    /// Liabilities recorded for `account`, empty if the account is unknown.
    async fn get(&self, account: &str) -> Result<Vec<Liability>>;

    /// Replaces the liabilities recorded for `account`.
    async fn put(&self, account: &str, liabilities: &[Liability]) -> Result<()>;

    /// Deletes the account's record, reporting whether it existed.
    async fn remove(&self, account: &str) -> Result<bool>;
}
