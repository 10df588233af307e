//! Data Transfer Objects for REST response serialization.
//!
//! Wire field names (`date`, `time`, `lat`, `lon`, `depth`, `mag`,
//! `place`, `lastUpdated`) are part of the published API and are kept
//! separate from the internal domain model.

pub mod earthquake_dto;

pub use earthquake_dto::*;
