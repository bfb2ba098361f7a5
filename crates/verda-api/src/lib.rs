#![forbid(unsafe_code)]
//! Wire contract for the pledge API: DTOs, the error envelope, and the
//! error-to-status mapping.

mod dto;
mod error_mapping;
mod errors;

pub use dto::{InsertPledgeDto, PledgeDto};
pub use error_mapping::map_error;
pub use errors::{ApiError, ApiErrorCode};

pub const CRATE_NAME: &str = "verda-api";
