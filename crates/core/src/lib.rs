//! Snapspace domain core.
//!
//! Shared types, the domain error, validation helpers, and the
//! merge-by-key planner used when snapshot requests are bulk upserted.

pub mod error;
pub mod merge;
pub mod snapshot_request;
pub mod types;
pub mod validation;
