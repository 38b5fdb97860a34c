//! Request-side validation for the profile service API
//!
//! The user id arrives as a path parameter string. It is parsed and
//! validated exactly once, here, before any store access.

use crate::error::{ProfileError, Result};

/// A validated, strictly positive user identifier.
///
/// The only way to obtain one is [`UserId::parse`], so handlers can never
/// hand a malformed or non-positive key to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(i64);

impl UserId {
    /// Parses a candidate id string into a validated key.
    ///
    /// The whole string must parse as an integer and the value must be
    /// at least 1; anything else is a client error.
    pub fn parse(raw: &str) -> Result<Self> {
        let id: i64 = raw
            .parse()
            .map_err(|_| ProfileError::InvalidId(raw.to_string()))?;

        if id < 1 {
            return Err(ProfileError::InvalidId(raw.to_string()));
        }

        Ok(Self(id))
    }

    /// Returns the validated id value.
    pub fn get(&self) -> i64 {
        self.0
    }
}
