//! API Module
//!
//! HTTP handlers and routing for the profile service REST API.
//!
//! # Endpoints
//! - `GET /api/user/:id` - Fetch a user profile by id
//! - `GET /api/stats` - Get store statistics
//! - `GET /api/health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
