//! Snapshot request status values.
//!
//! Status is stored as free text and transitions are unconstrained; these
//! are the values the service itself interprets.

/// Request is live and returned by the active listing.
pub const STATUS_ACTIVE: &str = "active";

/// Request has been retired by the client application.
pub const STATUS_DELETED: &str = "deleted";

/// Whether a stored status counts as active.
pub fn is_active(status: &str) -> bool {
    status == STATUS_ACTIVE
}
