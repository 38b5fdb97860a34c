//! Profile Record Module
//!
//! Defines the immutable profile value held by the store.

use serde::Serialize;

// == Profile Record ==
/// A single user profile. Created during warming, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    /// Positive user identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

impl ProfileRecord {
    // == Constructor ==
    /// Derives a synthetic profile from its id.
    ///
    /// The derivation is deterministic: the same id always yields the same
    /// name and email. In production this would load from a database during
    /// startup instead.
    pub fn synthetic(id: u64) -> Self {
        Self {
            id,
            name: format!("User{}", id),
            email: format!("user{}@example.com", id),
        }
    }
}
