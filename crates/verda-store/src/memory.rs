// SPDX-License-Identifier: Apache-2.0

use crate::contracts::{mint_pledge, sort_newest_first, PledgeStore, StoreError};
use async_trait::async_trait;
use tokio::sync::Mutex;
use verda_model::{InsertPledge, Pledge};

/// Volatile backend: process-lifetime collection, lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Pledge>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PledgeStore for MemoryStore {
    async fn create(&self, insert: InsertPledge) -> Result<Pledge, StoreError> {
        let pledge = mint_pledge(insert);
        self.records.lock().await.push(pledge.clone());
        Ok(pledge)
    }

    async fn list_all(&self) -> Result<Vec<Pledge>, StoreError> {
        let mut records = self.records.lock().await.clone();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn probe(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
