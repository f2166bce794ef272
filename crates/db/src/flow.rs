//! The listing wizard: category, item details, review and submit.
//!
//! [`ListingFlow`] applies each step to the stored draft and finalizes it
//! into a listing. Steps that simulate latency capture the flow's current
//! cancellation token before waiting and give up without touching the store
//! if [`ListingFlow::abandon`] ran in the meantime.
//!
//! Every read-modify-write of the draft and listing records runs under one
//! write guard, so one flow per store is the single writer for both.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::MutexGuard;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use tradepost_core::category::{CategoryPath, CategoryTree};
use tradepost_core::draft::{CategorySection, Draft, DraftPatch, DraftStage, ImageRef};
use tradepost_core::error::CoreError;
use tradepost_core::listing::Listing;
use tradepost_core::types::ListingId;
use tradepost_core::validation::{
    accept_images, validate_item_details, ImageCandidate, ItemDetailsInput, ValidationErrors,
};

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::repositories::{DraftRepo, ListingRepo};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Simulated latencies of the wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowDelays {
    pub upload: Duration,
    pub details: Duration,
    pub submit: Duration,
}

impl Default for FlowDelays {
    fn default() -> Self {
        Self {
            upload: Duration::from_millis(500),
            details: Duration::from_millis(800),
            submit: Duration::from_millis(1500),
        }
    }
}

impl FlowDelays {
    /// No waiting at all.
    pub const fn none() -> Self {
        Self {
            upload: Duration::ZERO,
            details: Duration::ZERO,
            submit: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlowConfig {
    pub delays: FlowDelays,
    /// Re-run the details rules against the stored draft before finalizing.
    pub revalidate_on_finalize: bool,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// One or more form fields are invalid. The draft was not changed.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// A write did not reach the store; the record was not saved.
    #[error("Persistence failure during {operation}: {source}")]
    Persistence {
        operation: &'static str,
        #[source]
        source: StoreError,
    },

    /// The flow was abandoned while this step was waiting.
    #[error("Operation cancelled because the listing flow was abandoned")]
    Cancelled,
}

fn persistence(operation: &'static str) -> impl FnOnce(StoreError) -> FlowError {
    move |source| FlowError::Persistence { operation, source }
}

// ---------------------------------------------------------------------------
// Flow
// ---------------------------------------------------------------------------

/// Drives the draft through the wizard and into the listing collection.
pub struct ListingFlow {
    store: Arc<dyn KeyValueStore>,
    config: FlowConfig,
    cancel: Mutex<CancellationToken>,
    writes: tokio::sync::Mutex<()>,
}

impl ListingFlow {
    pub fn new(store: Arc<dyn KeyValueStore>, config: FlowConfig) -> Self {
        Self {
            store,
            config,
            cancel: Mutex::new(CancellationToken::new()),
            writes: tokio::sync::Mutex::new(()),
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        &*self.store
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// The stored draft, if any.
    pub async fn draft(&self) -> Option<Draft> {
        DraftRepo::load(self.store()).await
    }

    pub async fn stage(&self) -> DraftStage {
        DraftStage::of(self.draft().await.as_ref())
    }

    /// The stored category path, re-resolved against `tree` so the category
    /// step can resume where it left off. Empty if there is none or it no
    /// longer matches the tree.
    pub async fn resume_path(&self, tree: &CategoryTree) -> CategoryPath {
        let Some(draft) = self.draft().await else {
            return CategoryPath::empty();
        };
        CategoryPath::from_crumbs(tree, &draft.category_path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Stored category path no longer matches the tree");
            CategoryPath::empty()
        })
    }

    /// Record the chosen category, creating the draft if needed.
    pub async fn choose_category(&self, path: &CategoryPath) -> Result<Draft, FlowError> {
        let section = CategorySection::from_path(path)?;
        let category_id = section.category_id.clone();

        let _guard = self.writes.lock().await;
        let mut draft = self.draft().await.unwrap_or_default();
        draft.merge(DraftPatch::Category(section));
        DraftRepo::save(self.store(), &draft)
            .await
            .map_err(persistence("save draft"))?;

        tracing::info!(category_id = %category_id, "Listing category chosen");
        Ok(draft)
    }

    /// Run image intake for a batch of uploads and return the resulting
    /// image list. Nothing is persisted; images are saved with the details.
    pub async fn check_images(
        &self,
        current: &[ImageRef],
        batch: Vec<ImageCandidate>,
    ) -> Result<Vec<ImageRef>, FlowError> {
        let images = accept_images(current, batch)?;
        self.pause(self.config.delays.upload).await?;
        Ok(images)
    }

    /// Validate the item details and merge them into the draft.
    pub async fn submit_details(&self, input: &ItemDetailsInput) -> Result<Draft, FlowError> {
        let section = validate_item_details(input)?;
        let _guard = self.pause_then_lock(self.config.delays.details).await?;

        let mut draft = self.draft().await.unwrap_or_default();
        draft.require_stage(DraftStage::CategoryChosen)?;
        let image_count = section.images.len();
        draft.merge(DraftPatch::Details(section));
        DraftRepo::save(self.store(), &draft)
            .await
            .map_err(persistence("save draft"))?;

        tracing::info!(
            category_id = draft.category_id.as_deref().unwrap_or_default(),
            image_count,
            "Listing details saved"
        );
        Ok(draft)
    }

    /// Turn the draft into an active listing and clear the draft.
    ///
    /// The write guard is held from the draft read until the draft is
    /// cleared, so a second submit of the same draft finds no details and
    /// is rejected instead of publishing a copy.
    pub async fn finalize(&self) -> Result<Listing, FlowError> {
        let _guard = self.pause_then_lock(self.config.delays.submit).await?;

        let draft = self.draft().await.unwrap_or_default();
        draft.require_stage(DraftStage::DetailsEntered)?;
        if self.config.revalidate_on_finalize {
            validate_item_details(&ItemDetailsInput::from_draft(&draft))?;
        }

        let listing = Listing::finalize(draft, Uuid::new_v4(), Utc::now());
        ListingRepo::append(self.store(), &listing)
            .await
            .map_err(persistence("append listing"))?;

        // The listing is stored at this point; a stale draft is only a nuisance.
        if let Err(e) = DraftRepo::clear(self.store()).await {
            tracing::error!(listing_id = %listing.id, error = %e, "Failed to clear draft after finalizing");
        }

        tracing::info!(
            listing_id = %listing.id,
            category_id = listing.draft.category_id.as_deref().unwrap_or_default(),
            image_count = listing.draft.images.len(),
            "Listing finalized"
        );
        Ok(listing)
    }

    /// Cancel any waiting step and discard the draft.
    pub async fn abandon(&self) -> Result<(), FlowError> {
        {
            let mut token = self.cancel.lock().unwrap_or_else(PoisonError::into_inner);
            token.cancel();
            *token = CancellationToken::new();
        }
        let _guard = self.writes.lock().await;
        DraftRepo::clear(self.store())
            .await
            .map_err(persistence("clear draft"))?;

        tracing::info!("Listing draft abandoned");
        Ok(())
    }

    /// Delete a published listing. Returns `false` if there was none with
    /// that id.
    pub async fn remove_listing(&self, id: ListingId) -> Result<bool, FlowError> {
        let _guard = self.writes.lock().await;
        let removed = ListingRepo::remove(self.store(), id)
            .await
            .map_err(persistence("remove listing"))?;

        if removed {
            tracing::info!(listing_id = %id, "Listing deleted");
        }
        Ok(removed)
    }

    /// Delete every published listing.
    pub async fn clear_listings(&self) -> Result<(), FlowError> {
        let _guard = self.writes.lock().await;
        ListingRepo::clear(self.store())
            .await
            .map_err(persistence("clear listings"))?;

        tracing::info!("Listings cleared");
        Ok(())
    }

    fn current_token(&self) -> CancellationToken {
        self.cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn pause(&self, delay: Duration) -> Result<(), FlowError> {
        let token = self.current_token();
        wait_or_cancel(&token, delay).await;
        if token.is_cancelled() {
            return Err(FlowError::Cancelled);
        }
        Ok(())
    }

    /// [`pause`](Self::pause), then take the write guard. An abandon that
    /// landed while the guard was contended still cancels the step.
    async fn pause_then_lock(&self, delay: Duration) -> Result<MutexGuard<'_, ()>, FlowError> {
        let token = self.current_token();
        wait_or_cancel(&token, delay).await;
        let guard = self.writes.lock().await;
        if token.is_cancelled() {
            return Err(FlowError::Cancelled);
        }
        Ok(guard)
    }
}

async fn wait_or_cancel(token: &CancellationToken, delay: Duration) {
    if !delay.is_zero() {
        tokio::select! {
            _ = token.cancelled() => {}
            _ = tokio::time::sleep(delay) => {}
        }
    }
}
