//! Response DTOs for the profile service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{ProfileRecord, StoreStats};

/// Response body for the user lookup (GET /api/user/:id)
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    /// User identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

impl ProfileResponse {
    /// Creates a response from a stored record.
    pub fn new(record: &ProfileRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
        }
    }
}

/// Store state as reported by the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    /// Number of warmed records
    pub size: usize,
    /// Whether warming has completed
    pub initialized: bool,
}

impl From<&StoreStats> for CacheStatus {
    fn from(stats: &StoreStats) -> Self {
        Self {
            size: stats.size,
            initialized: stats.ready,
        }
    }
}

/// Response body for the health endpoint (GET /api/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current store state
    pub cache: CacheStatus,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy(stats: &StoreStats) -> Self {
        Self {
            status: "healthy".to_string(),
            cache: CacheStatus::from(stats),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the stats endpoint (GET /api/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of warmed records
    pub size: usize,
    /// Whether warming has completed
    pub initialized: bool,
    /// Number of successful lookups
    pub hits: u64,
    /// Number of failed lookups
    pub misses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a store snapshot.
    pub fn new(stats: &StoreStats) -> Self {
        Self {
            size: stats.size,
            initialized: stats.ready,
            hits: stats.hits,
            misses: stats.misses,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
