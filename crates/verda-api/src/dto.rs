// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use verda_model::{InsertPledge, Pledge, ValidationFailure};

/// Raw submission body for `POST /pledges`. Field presence is enforced
/// by deserialization; content rules live in the model crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertPledgeDto {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl InsertPledgeDto {
    pub fn validate(&self) -> Result<InsertPledge, ValidationFailure> {
        InsertPledge::parse(&self.name, &self.email, &self.message)
    }
}

/// Response shape of a stored pledge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PledgeDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<Pledge> for PledgeDto {
    fn from(pledge: Pledge) -> Self {
        Self {
            id: pledge.id.as_str().to_string(),
            name: pledge.name.as_str().to_string(),
            email: pledge.email.as_str().to_string(),
            message: pledge.message.as_str().to_string(),
            created_at: pledge.created_at.to_rfc3339(),
        }
    }
}
