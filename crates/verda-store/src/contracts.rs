// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use chrono::Utc;
use std::fmt::{Display, Formatter};
use verda_model::{InsertPledge, Pledge, PledgeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorCode {
    Io,
    Corrupt,
    Internal,
}

impl StoreErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "io_error",
            Self::Corrupt => "corrupt_data",
            Self::Internal => "internal_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub code: StoreErrorCode,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn io(err: &std::io::Error) -> Self {
        Self::new(StoreErrorCode::Io, err.to_string())
    }

    #[must_use]
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::new(StoreErrorCode::Corrupt, message)
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for StoreError {}

/// Owner of the pledge collection. Validation happens before `create`;
/// the store only assigns identity and a timestamp, then persists.
#[async_trait]
pub trait PledgeStore: Send + Sync + 'static {
    /// Assigns a fresh unique id and the current instant, stores the
    /// record, and returns it. Fails only on backend I/O.
    async fn create(&self, insert: InsertPledge) -> Result<Pledge, StoreError>;

    /// Every stored pledge, newest first. Equal timestamps keep
    /// insertion order.
    async fn list_all(&self) -> Result<Vec<Pledge>, StoreError>;

    /// Readiness check against the backing medium.
    async fn probe(&self) -> Result<(), StoreError>;
}

pub(crate) fn mint_pledge(insert: InsertPledge) -> Pledge {
    Pledge::from_insert(PledgeId::new_random(), insert, Utc::now())
}

/// Records are kept in insertion order; a stable sort on the descending
/// timestamp therefore preserves insertion order among ties.
pub(crate) fn sort_newest_first(records: &mut [Pledge]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
