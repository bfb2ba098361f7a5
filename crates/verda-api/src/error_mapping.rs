// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ApiErrorCode};

#[must_use]
pub fn map_error(error: &ApiError) -> u16 {
    match error.code {
        ApiErrorCode::ValidationFailed | ApiErrorCode::MalformedBody => 400,
        ApiErrorCode::NotReady => 503,
        ApiErrorCode::StoreFailure | ApiErrorCode::Internal => 500,
    }
}
