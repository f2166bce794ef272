//! Finalized listings.

use serde::{Deserialize, Serialize};

use crate::draft::Draft;
use crate::types::{ListingId, Timestamp};

/// Lifecycle status of a listing. Finalization only ever produces `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Active,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
        }
    }
}

/// An immutable stored listing: the finalized draft plus bookkeeping.
///
/// The draft's keys are flattened into the listing object, so a stored
/// listing is the draft record with `id`, `createdAt`, `status`, `views`
/// and `watchers` added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub created_at: Timestamp,
    pub status: ListingStatus,
    pub views: u64,
    pub watchers: u64,
    #[serde(flatten)]
    pub draft: Draft,
}

impl Listing {
    /// Stamp a draft into a new active listing with zeroed counters.
    pub fn finalize(draft: Draft, id: ListingId, created_at: Timestamp) -> Self {
        Self {
            id,
            created_at,
            status: ListingStatus::Active,
            views: 0,
            watchers: 0,
            draft,
        }
    }
}
