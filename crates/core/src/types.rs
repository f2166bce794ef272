/// Listing identifiers are random v4 UUIDs.
pub type ListingId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
