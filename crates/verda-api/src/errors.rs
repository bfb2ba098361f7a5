// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use verda_model::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    ValidationFailed,
    MalformedBody,
    StoreFailure,
    NotReady,
    Internal,
}

impl ApiErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationFailed => "validation_failed",
            Self::MalformedBody => "malformed_body",
            Self::StoreFailure => "store_failure",
            Self::NotReady => "not_ready",
            Self::Internal => "internal_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn validation_failed(field_errors: &[FieldError]) -> Self {
        Self::new(
            ApiErrorCode::ValidationFailed,
            "Invalid input",
            json!(field_errors),
        )
    }

    #[must_use]
    pub fn malformed_body(reason: &str) -> Self {
        Self::new(
            ApiErrorCode::MalformedBody,
            "Request body is not a valid pledge submission",
            json!({ "reason": reason }),
        )
    }

    /// Store faults are reported generically; backend detail stays in
    /// the server logs.
    #[must_use]
    pub fn store_failure() -> Self {
        Self::new(ApiErrorCode::StoreFailure, "Failed to store pledge", Value::Null)
    }

    #[must_use]
    pub fn not_ready() -> Self {
        Self::new(ApiErrorCode::NotReady, "Service is not ready", Value::Null)
    }

    /// The `{error, details}` body shape served to clients.
    #[must_use]
    pub fn to_body(&self) -> Value {
        let mut body = json!({
            "error": self.message,
            "code": self.code.as_str(),
        });
        if !self.details.is_null() {
            body["details"] = self.details.clone();
        }
        body
    }
}
