/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Identifier of a timeline step. Stable within a catalog version.
pub type StepId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
