//! HTTP-level integration tests for the listing wizard and listings.
//!
//! Each test builds one shared in-memory store and a fresh router per
//! request, so state carries across the wizard steps.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::{json, Value};

use tradepost_db::{KeyValueStore, MemoryStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn store() -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryStore::new())
}

fn valid_details(images: &[&str]) -> Value {
    json!({
        "title": "Nintendo Switch OLED, white",
        "description": "Barely used console with dock, both joy-cons and the original box.",
        "condition": "used-like-new",
        "price": 289.0,
        "shipping": "standard",
        "itemSpecifics": { "brand": "Nintendo", "model": "OLED", "color": "White", "size": "" },
        "images": images,
    })
}

async fn choose(store: &Arc<dyn KeyValueStore>, path: &[&str]) -> (StatusCode, Value) {
    let app = common::build_test_app_with(Arc::clone(store));
    let response = put_json(app, "/api/v1/draft/category", json!({ "path": path })).await;
    (response.status(), body_json(response).await)
}

async fn details(store: &Arc<dyn KeyValueStore>, body: Value) -> (StatusCode, Value) {
    let app = common::build_test_app_with(Arc::clone(store));
    let response = put_json(app, "/api/v1/draft/details", body).await;
    (response.status(), body_json(response).await)
}

async fn submit(store: &Arc<dyn KeyValueStore>) -> (StatusCode, Value) {
    let app = common::build_test_app_with(Arc::clone(store));
    let response = post_json(app, "/api/v1/draft/submit", json!({})).await;
    (response.status(), body_json(response).await)
}

async fn publish(store: &Arc<dyn KeyValueStore>, title: &str) -> Value {
    choose(store, &["electronics", "video-games", "consoles"]).await;
    let mut body = valid_details(&["blob:front"]);
    body["title"] = json!(title);
    details(store, body).await;
    submit(store).await.1["data"].clone()
}

async fn get_json(store: &Arc<dyn KeyValueStore>, uri: &str) -> (StatusCode, Value) {
    let response = get(common::build_test_app_with(Arc::clone(store)), uri).await;
    (response.status(), body_json(response).await)
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_draft_reports_no_stage() {
    let (status, json) = get_json(&store(), "/api/v1/draft").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["stage"], "no_draft");
    assert!(json["data"]["draft"].is_null());
    assert_eq!(json["data"]["resumePath"], json!([]));
}

#[tokio::test]
async fn choosing_category_stores_id_and_label() {
    let store = store();

    let (status, json) = choose(&store, &["electronics", "cell-phones"]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["stage"], "category_chosen");
    assert_eq!(json["data"]["draft"]["categoryId"], "cell-phones");
    assert_eq!(
        json["data"]["draft"]["categoryName"],
        "Electronics > Cell Phones & Smartphones"
    );

    let (_, json) = get_json(&store, "/api/v1/draft").await;
    assert_eq!(json["data"]["resumePath"][1]["id"], "cell-phones");
}

#[tokio::test]
async fn root_only_category_is_rejected() {
    let store = store();

    let (status, json) = choose(&store, &["electronics"]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let (_, json) = get_json(&store, "/api/v1/draft").await;
    assert!(json["data"]["draft"].is_null());
}

#[tokio::test]
async fn invalid_details_return_field_errors() {
    let store = store();
    choose(&store, &["electronics", "cell-phones"]).await;

    let (status, json) = details(
        &store,
        json!({ "title": "Phone", "description": "Works", "listingFormat": "buy-it-now" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields = json["fields"].as_object().unwrap();
    let mut names: Vec<&str> = fields.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["condition", "description", "images", "price", "title"]);
    assert_eq!(fields["title"], "Title must be at least 10 characters");

    let (_, json) = get_json(&store, "/api/v1/draft").await;
    assert_eq!(json["data"]["stage"], "category_chosen");
}

#[tokio::test]
async fn details_without_category_are_rejected() {
    let (status, json) = details(&store(), valid_details(&["blob:a"])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn valid_details_add_display_fields() {
    let store = store();
    choose(&store, &["electronics", "video-games", "consoles"]).await;

    let (status, json) = details(&store, valid_details(&["blob:a", "blob:b"])).await;

    assert_eq!(status, StatusCode::OK);
    let draft = &json["data"]["draft"];
    assert_eq!(json["data"]["stage"], "details_entered");
    assert_eq!(draft["conditionName"], "Used - Like New");
    assert_eq!(draft["shippingName"], "Standard Shipping");
    assert_eq!(draft["shippingPrice"], 5.99);
    assert_eq!(draft["listingFormat"], "buy-it-now");
    assert_eq!(draft["quantity"], 1);
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

#[tokio::test]
async fn image_batch_filters_ineligible_candidates() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/draft/images",
        json!({
            "current": ["blob:kept"],
            "candidates": [
                { "reference": "blob:ok", "mediaType": "image/jpeg", "sizeBytes": 1024 },
                { "reference": "blob:doc", "mediaType": "text/plain", "sizeBytes": 10 },
                { "reference": "blob:big", "mediaType": "image/png", "sizeBytes": 20971520 },
            ],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], json!(["blob:kept", "blob:ok"]));
}

#[tokio::test]
async fn image_batch_over_limit_is_rejected() {
    let current: Vec<String> = (0..12).map(|i| format!("blob:{i}")).collect();
    let response = post_json(
        common::build_test_app(),
        "/api/v1/draft/images",
        json!({
            "current": current,
            "candidates": [{ "reference": "blob:x", "mediaType": "image/png", "sizeBytes": 1 }],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["images"], "Maximum 12 images allowed");
}

// ---------------------------------------------------------------------------
// Submit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_publishes_active_listing_and_clears_draft() {
    let store = store();
    choose(&store, &["electronics", "video-games", "consoles"]).await;
    details(&store, valid_details(&["blob:a", "blob:b"])).await;

    let (status, json) = submit(&store).await;

    assert_eq!(status, StatusCode::CREATED);
    let listing = &json["data"];
    assert_eq!(listing["status"], "active");
    assert_eq!(listing["views"], 0);
    assert_eq!(listing["watchers"], 0);
    assert_eq!(listing["images"].as_array().unwrap().len(), 2);
    assert!(listing["createdAt"].is_string());
    let id = listing["id"].as_str().unwrap();
    assert_eq!(id.len(), 36);

    let (_, draft) = get_json(&store, "/api/v1/draft").await;
    assert!(draft["data"]["draft"].is_null());

    let (status, fetched) = get_json(&store, &format!("/api/v1/listings/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["title"], "Nintendo Switch OLED, white");
}

#[tokio::test]
async fn submit_without_details_is_rejected() {
    let store = store();
    choose(&store, &["electronics", "cell-phones"]).await;

    let (status, _) = submit(&store).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, json) = get_json(&store, "/api/v1/listings").await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn abandon_discards_draft() {
    let store = store();
    choose(&store, &["electronics", "cell-phones"]).await;

    let response = delete(common::build_test_app_with(Arc::clone(&store)), "/api/v1/draft").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let (_, json) = get_json(&store, "/api/v1/draft").await;
    assert_eq!(json["data"]["stage"], "no_draft");
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listings_are_newest_first_and_recent_is_capped() {
    let store = store();
    for n in 1..=5 {
        publish(&store, &format!("Console bundle number {n}")).await;
    }

    let (_, all) = get_json(&store, "/api/v1/listings").await;
    let titles: Vec<&str> = all["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles.len(), 5);
    assert_eq!(titles[0], "Console bundle number 5");
    assert_eq!(titles[4], "Console bundle number 1");

    let (_, recent) = get_json(&store, "/api/v1/listings/recent").await;
    let recent = recent["data"].as_array().unwrap();
    assert_eq!(recent.len(), 4);
    assert_eq!(recent[0]["title"], "Console bundle number 5");

    let (_, two) = get_json(&store, "/api/v1/listings/recent?limit=2").await;
    assert_eq!(two["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_listing_is_404() {
    let (status, json) = get_json(
        &store(),
        "/api/v1/listings/00000000-0000-4000-8000-000000000000",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn deleting_listing_removes_only_that_listing() {
    let store = store();
    let keep = publish(&store, "Console bundle to keep").await;
    let gone = publish(&store, "Console bundle to delete").await;

    let uri = format!("/api/v1/listings/{}", gone["id"].as_str().unwrap());
    let response = delete(common::build_test_app_with(Arc::clone(&store)), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (_, all) = get_json(&store, "/api/v1/listings").await;
    assert_eq!(all["data"].as_array().unwrap().len(), 1);
    assert_eq!(all["data"][0]["id"], keep["id"]);
}

#[tokio::test]
async fn deleting_unknown_listing_is_a_no_op() {
    let store = store();
    publish(&store, "Console bundle that stays").await;

    let response = delete(
        common::build_test_app_with(Arc::clone(&store)),
        "/api/v1/listings/00000000-0000-4000-8000-000000000000",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let (_, all) = get_json(&store, "/api/v1/listings").await;
    assert_eq!(all["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn clearing_listings_empties_collection() {
    let store = store();
    publish(&store, "Console bundle to clear").await;

    let response = delete(common::build_test_app_with(Arc::clone(&store)), "/api/v1/listings").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let (_, all) = get_json(&store, "/api/v1/listings").await;
    assert_eq!(all["data"], json!([]));
}
