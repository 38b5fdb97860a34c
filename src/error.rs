//! Error types for the profile service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Profile Error Enum ==
/// Unified error type for the profile service.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Store used before warming completed
    #[error("profile store not initialized")]
    NotReady,

    /// Candidate id failed boundary validation (non-numeric or not positive)
    #[error("invalid user id: {0}")]
    InvalidId(String),

    /// No profile record for a well-formed id
    #[error("no profile for user id {0}")]
    NotFound(i64),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        // Clients see only the contractual status/body pairs, never the
        // internal error kinds.
        let (status, message) = match &self {
            ProfileError::NotReady => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            ProfileError::InvalidId(_) => (StatusCode::BAD_REQUEST, "Invalid user ID"),
            ProfileError::NotFound(_) => (StatusCode::NOT_FOUND, "User not found"),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the profile service.
pub type Result<T> = std::result::Result<T, ProfileError>;
