//! Profile Cache - a low-latency user profile lookup service
//!
//! Serves read-only user profiles from an in-memory store that is warmed
//! once at startup and frozen for the remainder of the process lifetime.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use config::Config;
