//! API Handlers
//!
//! HTTP request handlers for each profile service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::ProfileStore;
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, ProfileResponse, StatsResponse, UserId};

/// Application state shared across all handlers.
///
/// Holds the profile store behind an `Arc` only. The store is warmed before
/// the listener starts and never mutated afterwards, so handlers read it
/// without any locking.
#[derive(Clone)]
pub struct AppState {
    /// Frozen profile store
    pub store: Arc<ProfileStore>,
}

impl AppState {
    /// Wraps an already-constructed store for sharing across handlers.
    ///
    /// Callers are expected to warm the store first; tests pass an unwarmed
    /// store to exercise the not-ready path.
    pub fn new(store: ProfileStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Builds and warms a store from configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut store = ProfileStore::new();
        store.warm(config.store_size);
        Self::new(store)
    }
}

/// Handler for GET /api/user/:id
///
/// Validates the path parameter, then resolves the profile from the store.
/// Malformed or non-positive ids are rejected as 400 before the store is
/// consulted; ids with no record map to 404.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProfileResponse>> {
    let user_id = UserId::parse(&raw_id)?;
    let record = state.store.lookup(user_id.get())?;

    Ok(Json(ProfileResponse::new(record)))
}

/// Handler for GET /api/stats
///
/// Returns the current store snapshot including lookup counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(&state.store.stats()))
}

/// Handler for GET /api/health
///
/// Returns health status of the server together with the store state.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(&state.store.stats()))
}
