//! Repository for the single in-progress draft record.

use tradepost_core::draft::Draft;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Storage key of the draft record.
pub const DRAFT_KEY: &str = "tradepost_draft";

/// Load, save and clear the draft.
pub struct DraftRepo;

impl DraftRepo {
    /// Read the draft, treating any read or decode failure as "no draft".
    pub async fn load(store: &dyn KeyValueStore) -> Option<Draft> {
        match Self::try_load(store).await {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!(key = DRAFT_KEY, error = %e, "Draft record unreadable, treating as absent");
                None
            }
        }
    }

    /// Read the draft, surfacing failures.
    pub async fn try_load(store: &dyn KeyValueStore) -> Result<Option<Draft>, StoreError> {
        match store.get(DRAFT_KEY).await? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Replace the stored draft.
    pub async fn save(store: &dyn KeyValueStore, draft: &Draft) -> Result<(), StoreError> {
        let text = serde_json::to_string(draft)?;
        store.set(DRAFT_KEY, &text).await
    }

    /// Delete the draft. Clearing an absent draft succeeds.
    pub async fn clear(store: &dyn KeyValueStore) -> Result<(), StoreError> {
        store.remove(DRAFT_KEY).await
    }
}
