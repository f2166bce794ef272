//! Integration tests for the draft and listing repositories.
//!
//! Every scenario runs against both stores: the in-memory one and SQLite
//! with the embedded migrations applied to a private in-memory database.

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use uuid::Uuid;

use tradepost_core::catalog::{Condition, ListingFormat, ShippingOption};
use tradepost_core::category::CategoryCrumb;
use tradepost_core::draft::{Draft, ImageRef, ItemSpecifics};
use tradepost_core::listing::{Listing, ListingStatus};
use tradepost_db::repositories::draft_repo::DRAFT_KEY;
use tradepost_db::repositories::listing_repo::{DEFAULT_RECENT_LIMIT, LISTINGS_KEY};
use tradepost_db::repositories::{DraftRepo, ListingRepo};
use tradepost_db::{KeyValueStore, MemoryStore, SqliteStore, StoreError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn sqlite_store() -> SqliteStore {
    let pool = tradepost_db::create_memory_pool().await.unwrap();
    tradepost_db::run_migrations(&pool).await.unwrap();
    SqliteStore::new(pool)
}

async fn stores() -> Vec<(&'static str, Box<dyn KeyValueStore>)> {
    let memory: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
    let sqlite: Box<dyn KeyValueStore> = Box::new(sqlite_store().await);
    vec![("memory", memory), ("sqlite", sqlite)]
}

fn full_draft() -> Draft {
    Draft {
        category_path: vec![
            CategoryCrumb {
                id: "electronics".to_string(),
                name: "Electronics".to_string(),
                icon: Some("📱".to_string()),
            },
            CategoryCrumb {
                id: "cell-phones".to_string(),
                name: "Cell Phones & Smartphones".to_string(),
                icon: None,
            },
        ],
        category_id: Some("cell-phones".to_string()),
        category_name: Some("Electronics > Cell Phones & Smartphones".to_string()),
        title: Some("Unlocked phone, barely used".to_string()),
        description: Some("Comes with the original box and charger.".to_string()),
        condition: Some(Condition::UsedLikeNew),
        condition_name: Some(Condition::UsedLikeNew.name().to_string()),
        listing_format: Some(ListingFormat::AuctionBin),
        price: Some(349.99),
        starting_bid: Some(120.5),
        quantity: Some(2),
        shipping: Some(ShippingOption::Standard),
        shipping_name: Some(ShippingOption::Standard.name().to_string()),
        shipping_price: ShippingOption::Standard.price(),
        item_specifics: Some(ItemSpecifics {
            brand: "Acme".to_string(),
            model: "X1".to_string(),
            color: "Black".to_string(),
            size: String::new(),
        }),
        images: vec![
            ImageRef::new("data:image/png;base64,AAAA"),
            ImageRef::new("blob:front-view"),
        ],
    }
}

fn listing_at(minutes_ago: i64) -> Listing {
    Listing::finalize(
        full_draft(),
        Uuid::new_v4(),
        Utc::now() - Duration::minutes(minutes_ago),
    )
}

fn ids(listings: &[Listing]) -> Vec<Uuid> {
    listings.iter().map(|l| l.id).collect()
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

#[tokio::test]
async fn draft_round_trips_every_field() {
    for (name, store) in stores().await {
        let draft = full_draft();
        DraftRepo::save(&*store, &draft).await.unwrap();

        let loaded = DraftRepo::load(&*store).await;
        assert_eq!(loaded, Some(draft), "store: {name}");
    }
}

#[tokio::test]
async fn draft_save_overwrites_previous_record() {
    for (name, store) in stores().await {
        DraftRepo::save(&*store, &full_draft()).await.unwrap();

        let replacement = Draft {
            category_id: Some("laptops".to_string()),
            ..Draft::default()
        };
        DraftRepo::save(&*store, &replacement).await.unwrap();

        let loaded = DraftRepo::load(&*store).await.unwrap();
        assert_eq!(loaded, replacement, "store: {name}");
        assert!(loaded.title.is_none());
    }
}

#[tokio::test]
async fn clearing_draft_twice_leaves_it_absent() {
    for (name, store) in stores().await {
        DraftRepo::save(&*store, &full_draft()).await.unwrap();

        DraftRepo::clear(&*store).await.unwrap();
        DraftRepo::clear(&*store).await.unwrap();

        assert!(DraftRepo::load(&*store).await.is_none(), "store: {name}");
    }
}

#[tokio::test]
async fn corrupt_draft_reads_as_absent() {
    for (name, store) in stores().await {
        store.set(DRAFT_KEY, "{not json").await.unwrap();

        assert!(DraftRepo::load(&*store).await.is_none(), "store: {name}");
        assert_matches!(
            DraftRepo::try_load(&*store).await,
            Err(StoreError::Serialization(_))
        );
    }
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn append_preserves_insertion_order() {
    for (name, store) in stores().await {
        let first = listing_at(10);
        let second = listing_at(5);
        ListingRepo::append(&*store, &first).await.unwrap();
        ListingRepo::append(&*store, &second).await.unwrap();

        let all = ListingRepo::load_all(&*store).await;
        assert_eq!(ids(&all), vec![first.id, second.id], "store: {name}");
        assert_eq!(all[0], first);
        assert_eq!(all[0].status, ListingStatus::Active);
    }
}

#[tokio::test]
async fn append_rejects_duplicate_id() {
    for (name, store) in stores().await {
        let listing = listing_at(0);
        ListingRepo::append(&*store, &listing).await.unwrap();

        let err = ListingRepo::append(&*store, &listing).await.unwrap_err();
        assert_matches!(err, StoreError::DuplicateId(id) if id == listing.id);
        assert_eq!(ListingRepo::load_all(&*store).await.len(), 1, "store: {name}");
    }
}

#[tokio::test]
async fn find_by_id_returns_none_when_absent() {
    for (name, store) in stores().await {
        let listing = listing_at(0);
        ListingRepo::append(&*store, &listing).await.unwrap();

        assert_eq!(
            ListingRepo::find_by_id(&*store, listing.id).await,
            Some(listing),
            "store: {name}"
        );
        assert!(ListingRepo::find_by_id(&*store, Uuid::new_v4()).await.is_none());
    }
}

#[tokio::test]
async fn remove_deletes_only_matching_listing() {
    for (name, store) in stores().await {
        let keep = listing_at(2);
        let gone = listing_at(1);
        ListingRepo::append(&*store, &keep).await.unwrap();
        ListingRepo::append(&*store, &gone).await.unwrap();

        assert!(ListingRepo::remove(&*store, gone.id).await.unwrap());
        assert_eq!(ids(&ListingRepo::load_all(&*store).await), vec![keep.id], "store: {name}");
    }
}

#[tokio::test]
async fn remove_of_absent_id_is_a_no_op() {
    for (name, store) in stores().await {
        let listing = listing_at(0);
        ListingRepo::append(&*store, &listing).await.unwrap();
        let before = store.get(LISTINGS_KEY).await.unwrap();

        assert!(!ListingRepo::remove(&*store, Uuid::new_v4()).await.unwrap());

        assert_eq!(store.get(LISTINGS_KEY).await.unwrap(), before, "store: {name}");
    }
}

#[tokio::test]
async fn clear_removes_collection_record() {
    for (name, store) in stores().await {
        ListingRepo::append(&*store, &listing_at(0)).await.unwrap();

        ListingRepo::clear(&*store).await.unwrap();

        assert!(store.get(LISTINGS_KEY).await.unwrap().is_none(), "store: {name}");
        assert!(ListingRepo::load_all(&*store).await.is_empty());
    }
}

#[tokio::test]
async fn newest_first_and_recent_reverse_insertion_order() {
    for (name, store) in stores().await {
        let mut appended = Vec::new();
        for minutes_ago in (0..6).rev() {
            let listing = listing_at(minutes_ago);
            ListingRepo::append(&*store, &listing).await.unwrap();
            appended.push(listing.id);
        }
        appended.reverse();

        assert_eq!(ids(&ListingRepo::newest_first(&*store).await), appended, "store: {name}");
        assert_eq!(
            ids(&ListingRepo::recent(&*store, DEFAULT_RECENT_LIMIT).await),
            appended[..DEFAULT_RECENT_LIMIT].to_vec()
        );
        assert_eq!(ListingRepo::recent(&*store, 10).await.len(), 6);
    }
}

// ---------------------------------------------------------------------------
// Corrupt collection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn corrupt_collection_reads_as_empty() {
    for (name, store) in stores().await {
        store.set(LISTINGS_KEY, "[{\"id\": 42").await.unwrap();

        assert!(ListingRepo::load_all(&*store).await.is_empty(), "store: {name}");
        assert!(ListingRepo::newest_first(&*store).await.is_empty());
    }
}

#[tokio::test]
async fn writes_never_truncate_a_corrupt_collection() {
    for (name, store) in stores().await {
        let raw = "[{\"id\": 42";
        store.set(LISTINGS_KEY, raw).await.unwrap();

        assert_matches!(
            ListingRepo::append(&*store, &listing_at(0)).await,
            Err(StoreError::Serialization(_))
        );
        assert_matches!(
            ListingRepo::remove(&*store, Uuid::new_v4()).await,
            Err(StoreError::Serialization(_))
        );

        assert_eq!(
            store.get(LISTINGS_KEY).await.unwrap().as_deref(),
            Some(raw),
            "store: {name}"
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_keep_every_listing() {
    let memory: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let sqlite: Arc<dyn KeyValueStore> = Arc::new(sqlite_store().await);

    for (name, store) in [("memory", memory), ("sqlite", sqlite)] {
        let tasks: Vec<_> = (0..20)
            .map(|n| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { ListingRepo::append(&*store, &listing_at(n)).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(ListingRepo::load_all(&*store).await.len(), 20, "store: {name}");
    }
}
