use tradepost_core::types::ListingId;

/// Failure of a persistence operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing database rejected or failed the operation.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored record could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store refused the operation (quota exceeded, unreachable, ...).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Listing {0} already exists")]
    DuplicateId(ListingId),
}
