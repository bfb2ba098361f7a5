// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;
use validator::ValidateEmail;

pub const NAME_MAX_LEN: usize = 256;
pub const EMAIL_MAX_LEN: usize = 320;
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 4096;

/// A single failed field with a caller-facing reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Every failing field of a submission, accumulated rather than
/// first-failure-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field_errors: Vec<FieldError>,
}

impl Display for ValidationFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self
            .field_errors
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        write!(f, "validation failed: {}", joined.join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct PledgeId(String);

impl PledgeId {
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct PledgeName(String);

impl PledgeName {
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        if input.trim().is_empty() {
            return Err(FieldError::new("name", "Name is required"));
        }
        if input.len() > NAME_MAX_LEN {
            return Err(FieldError::new(
                "name",
                format!("Name exceeds max length {NAME_MAX_LEN}"),
            ));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct PledgeEmail(String);

impl PledgeEmail {
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        if input.len() > EMAIL_MAX_LEN {
            return Err(FieldError::new(
                "email",
                format!("Email exceeds max length {EMAIL_MAX_LEN}"),
            ));
        }
        if !input.validate_email() {
            return Err(FieldError::new("email", "Valid email is required"));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct PledgeMessage(String);

impl PledgeMessage {
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        if input.chars().count() < MESSAGE_MIN_LEN {
            return Err(FieldError::new(
                "message",
                "Please write at least 10 characters",
            ));
        }
        if input.len() > MESSAGE_MAX_LEN {
            return Err(FieldError::new(
                "message",
                format!("Message exceeds max length {MESSAGE_MAX_LEN}"),
            ));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated pre-persistence shape of a pledge submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertPledge {
    pub name: PledgeName,
    pub email: PledgeEmail,
    pub message: PledgeMessage,
}

impl InsertPledge {
    /// Validates all three fields, accumulating every failure.
    pub fn parse(name: &str, email: &str, message: &str) -> Result<Self, ValidationFailure> {
        let mut field_errors = Vec::new();
        let name = PledgeName::parse(name).map_err(|e| field_errors.push(e));
        let email = PledgeEmail::parse(email).map_err(|e| field_errors.push(e));
        let message = PledgeMessage::parse(message).map_err(|e| field_errors.push(e));
        match (name, email, message) {
            (Ok(name), Ok(email), Ok(message)) => Ok(Self {
                name,
                email,
                message,
            }),
            _ => Err(ValidationFailure { field_errors }),
        }
    }
}

/// A persisted climate-action commitment. Immutable once created; the store
/// never updates or deletes these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pledge {
    pub id: PledgeId,
    pub name: PledgeName,
    pub email: PledgeEmail,
    pub message: PledgeMessage,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Pledge {
    #[must_use]
    pub fn from_insert(id: PledgeId, insert: InsertPledge, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: insert.name,
            email: insert.email,
            message: insert.message,
            created_at,
        }
    }
}
