//! Repository for the listing collection record.
//!
//! The collection is stored as one JSON array in insertion order. Reads for
//! display fail soft; writes read the collection strictly first so an
//! unreadable record is never overwritten with a shorter one.
//!
//! Appends and removals are serialized across the process so concurrent
//! writers cannot drop each other's listings. Finalizing also holds the
//! [`ListingFlow`](crate::flow::ListingFlow) write guard so the draft and
//! the collection change together.

use tokio::sync::Mutex;

use tradepost_core::listing::Listing;
use tradepost_core::types::ListingId;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Storage key of the listing collection.
pub const LISTINGS_KEY: &str = "tradepost_listings";

/// Number of listings the home page shows.
pub const DEFAULT_RECENT_LIMIT: usize = 4;

/// Held across each read-modify-write of the collection record.
static COLLECTION_WRITES: Mutex<()> = Mutex::const_new(());

/// Provides read, append and delete operations over the listing collection.
pub struct ListingRepo;

impl ListingRepo {
    /// All listings in insertion order; empty if the record is unreadable.
    pub async fn load_all(store: &dyn KeyValueStore) -> Vec<Listing> {
        match Self::try_load_all(store).await {
            Ok(listings) => listings,
            Err(e) => {
                tracing::warn!(key = LISTINGS_KEY, error = %e, "Listing collection unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// All listings in insertion order, surfacing failures.
    pub async fn try_load_all(store: &dyn KeyValueStore) -> Result<Vec<Listing>, StoreError> {
        match store.get(LISTINGS_KEY).await? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(Vec::new()),
        }
    }

    /// Find a listing by ID. `None` is the not-found state.
    pub async fn find_by_id(store: &dyn KeyValueStore, id: ListingId) -> Option<Listing> {
        Self::load_all(store).await.into_iter().find(|l| l.id == id)
    }

    /// All listings, most recent first.
    pub async fn newest_first(store: &dyn KeyValueStore) -> Vec<Listing> {
        let mut listings = Self::load_all(store).await;
        listings.reverse();
        listings
    }

    /// The last `limit` listings appended, most recent first.
    pub async fn recent(store: &dyn KeyValueStore, limit: usize) -> Vec<Listing> {
        let mut listings = Self::newest_first(store).await;
        listings.truncate(limit);
        listings
    }

    /// Append a listing to the end of the collection.
    pub async fn append(store: &dyn KeyValueStore, listing: &Listing) -> Result<(), StoreError> {
        let _guard = COLLECTION_WRITES.lock().await;
        let mut listings = Self::try_load_all(store).await?;
        if listings.iter().any(|l| l.id == listing.id) {
            return Err(StoreError::DuplicateId(listing.id));
        }
        listings.push(listing.clone());
        Self::write(store, &listings).await
    }

    /// Remove the listing with `id`. Returns `false` (and writes nothing) if
    /// no such listing exists.
    pub async fn remove(store: &dyn KeyValueStore, id: ListingId) -> Result<bool, StoreError> {
        let _guard = COLLECTION_WRITES.lock().await;
        let mut listings = Self::try_load_all(store).await?;
        let before = listings.len();
        listings.retain(|l| l.id != id);
        if listings.len() == before {
            return Ok(false);
        }
        Self::write(store, &listings).await?;
        Ok(true)
    }

    /// Delete the whole collection record.
    pub async fn clear(store: &dyn KeyValueStore) -> Result<(), StoreError> {
        let _guard = COLLECTION_WRITES.lock().await;
        store.remove(LISTINGS_KEY).await
    }

    async fn write(store: &dyn KeyValueStore, listings: &[Listing]) -> Result<(), StoreError> {
        let text = serde_json::to_string(listings)?;
        store.set(LISTINGS_KEY, &text).await
    }
}
