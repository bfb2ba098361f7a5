#![forbid(unsafe_code)]
//! Pledge domain model SSOT.

mod pledge;

pub use pledge::{
    FieldError, InsertPledge, Pledge, PledgeEmail, PledgeId, PledgeMessage, PledgeName,
    ValidationFailure, EMAIL_MAX_LEN, MESSAGE_MAX_LEN, MESSAGE_MIN_LEN, NAME_MAX_LEN,
};

pub const CRATE_NAME: &str = "verda-model";
