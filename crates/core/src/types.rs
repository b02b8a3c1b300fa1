/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse an identifier taken from a URL path segment.
///
/// Returns `None` for anything that is not a positive integer. Callers treat
/// that the same as a lookup miss, since no stored row can carry such an id.
pub fn parse_db_id(raw: &str) -> Option<DbId> {
    raw.trim().parse::<DbId>().ok().filter(|id| *id > 0)
}
