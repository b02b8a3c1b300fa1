pub mod client;
pub mod snapshot;
pub mod snapshot_request;
pub mod storage;

use snapspace_core::error::CoreError;
use snapspace_core::types::{parse_db_id, DbId};

/// Parse a path id, reporting an unparseable value as a lookup miss.
pub(crate) fn path_id(entity: &'static str, raw: &str) -> Result<DbId, CoreError> {
    parse_db_id(raw).ok_or_else(|| CoreError::not_found(entity, raw))
}
