//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use profile_cache::{api::create_router, cache::ProfileStore, AppState};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app(store_size: usize) -> Router {
    let mut store = ProfileStore::new();
    store.warm(store_size);
    create_router(AppState::new(store))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// == User Endpoint Tests ==

#[tokio::test]
async fn test_user_endpoint_returns_profile() {
    let app = create_test_app(1000);

    let (status, json) = get(app, "/api/user/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"].as_u64().unwrap(), 1);
    assert_eq!(json["name"].as_str().unwrap(), "User1");
    assert_eq!(json["email"].as_str().unwrap(), "user1@example.com");
}

#[tokio::test]
async fn test_user_endpoint_last_warmed_id() {
    let app = create_test_app(1000);

    let (status, json) = get(app, "/api/user/1000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"].as_u64().unwrap(), 1000);
    assert_eq!(json["name"].as_str().unwrap(), "User1000");
}

#[tokio::test]
async fn test_user_endpoint_beyond_range_is_404() {
    let app = create_test_app(1000);

    let (status, json) = get(app, "/api/user/1001").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"].as_str().unwrap(), "User not found");
}

#[tokio::test]
async fn test_user_endpoint_rejects_malformed_ids() {
    for raw in ["abc", "0", "-5", "1.5", "12abc"] {
        let app = create_test_app(100);

        let (status, json) = get(app, &format!("/api/user/{}", raw)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "input: {}", raw);
        assert_eq!(json["error"].as_str().unwrap(), "Invalid user ID");
    }
}

#[tokio::test]
async fn test_user_endpoint_huge_numeric_id_is_404() {
    let app = create_test_app(100);

    // Parses as an integer, just has no record
    let (status, json) = get(app, "/api/user/1000000000").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"].as_str().unwrap(), "User not found");
}

#[tokio::test]
async fn test_repeated_lookups_return_identical_bodies() {
    let app = create_test_app(100);

    let (_, first) = get(app.clone(), "/api/user/5").await;
    let (_, second) = get(app, "/api/user/5").await;

    assert_eq!(first, second);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint_shape() {
    let app = create_test_app(1000);

    let (status, json) = get(app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert_eq!(json["cache"]["size"].as_u64().unwrap(), 1000);
    assert_eq!(json["cache"]["initialized"].as_bool().unwrap(), true);
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_health_endpoint_before_warming() {
    let app = create_router(AppState::new(ProfileStore::new()));

    let (status, json) = get(app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cache"]["size"].as_u64().unwrap(), 0);
    assert_eq!(json["cache"]["initialized"].as_bool().unwrap(), false);
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_tracks_lookups() {
    let app = create_test_app(100);

    // One hit, one miss
    let _ = get(app.clone(), "/api/user/1").await;
    let _ = get(app.clone(), "/api/user/101").await;

    let (status, json) = get(app, "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["size"].as_u64().unwrap(), 100);
    assert_eq!(json["initialized"].as_bool().unwrap(), true);
    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["misses"].as_u64().unwrap(), 1);
    assert!(json.get("hit_rate").is_some());
}

#[tokio::test]
async fn test_stats_endpoint_ignores_rejected_ids() {
    let app = create_test_app(100);

    // Rejected at the boundary, never reaches the store
    let _ = get(app.clone(), "/api/user/abc").await;

    let (_, json) = get(app, "/api/stats").await;
    assert_eq!(json["hits"].as_u64().unwrap(), 0);
    assert_eq!(json["misses"].as_u64().unwrap(), 0);
}

// == Startup Ordering Tests ==

#[tokio::test]
async fn test_unwarmed_store_is_a_server_error() {
    // A listener should never be serving an unwarmed store; if it happens
    // anyway the client sees a 5xx, not a misleading 404.
    let app = create_router(AppState::new(ProfileStore::new()));

    let (status, json) = get(app, "/api/user/1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json.get("error").is_some());
}
