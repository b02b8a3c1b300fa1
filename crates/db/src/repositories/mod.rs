//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or a connection, when composed inside a transaction)
//! as the first argument.

pub mod client_repo;
pub mod project_repo;
pub mod snapshot_repo;
pub mod snapshot_request_repo;

pub use client_repo::ClientRepo;
pub use project_repo::ProjectRepo;
pub use snapshot_repo::SnapshotRepo;
pub use snapshot_request_repo::SnapshotRequestRepo;
