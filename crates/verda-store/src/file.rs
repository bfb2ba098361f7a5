// SPDX-License-Identifier: Apache-2.0

use crate::contracts::{mint_pledge, sort_newest_first, PledgeStore, StoreError, StoreErrorCode};
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;
use tokio::sync::Mutex;
use verda_model::{InsertPledge, Pledge};

/// Persisted backend: a single JSON array file, rewritten whole on every
/// create. All access goes through one async mutex, so the
/// read-modify-write cycle of concurrent creates cannot lose records.
pub struct FileStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileStore {
    /// Opens the store at `path`, initializing it to an empty array if
    /// the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| StoreError::io(&e))?;
                }
            }
            fs::write(&path, b"[]").map_err(|e| StoreError::io(&e))?;
        }
        Ok(Self {
            path,
            guard: Mutex::new(()),
        })
    }

    async fn read_records(&self) -> Result<Vec<Pledge>, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StoreError::io(&e))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::corrupt(format!("pledge file is not a valid list: {e}")))
    }

    async fn write_records(&self, records: &[Pledge]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|e| StoreError::new(StoreErrorCode::Internal, e.to_string()))?;
        // Write-then-rename keeps the file a complete array even if the
        // process dies mid-write.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::io(&e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::io(&e))
    }
}

#[async_trait]
impl PledgeStore for FileStore {
    async fn create(&self, insert: InsertPledge) -> Result<Pledge, StoreError> {
        let _guard = self.guard.lock().await;
        let mut records = self.read_records().await?;
        let pledge = mint_pledge(insert);
        records.push(pledge.clone());
        self.write_records(&records).await?;
        Ok(pledge)
    }

    async fn list_all(&self) -> Result<Vec<Pledge>, StoreError> {
        let _guard = self.guard.lock().await;
        let mut records = self.read_records().await?;
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn probe(&self) -> Result<(), StoreError> {
        let _guard = self.guard.lock().await;
        self.read_records().await.map(|_| ())
    }
}
