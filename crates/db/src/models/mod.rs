//! Row structs and request DTOs, one module per table.

pub mod client;
pub mod project;
pub mod snapshot;
pub mod snapshot_request;
