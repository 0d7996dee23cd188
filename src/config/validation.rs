//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that the callback parameter can appear raw in a query string
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: JsonpConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::JsonpConfig;

/// A single semantic problem with a [`JsonpConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("callback_param must not be empty")]
    EmptyCallbackParam,

    #[error("callback_param {name:?} contains reserved character {ch:?}")]
    ReservedCharacter { name: String, ch: char },
}

/// Characters that would be split, decoded or truncated by query parsing.
const RESERVED: &[char] = &['&', '=', '#', '?', '+', '%'];

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &JsonpConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let name = &config.callback_param;

    if name.is_empty() {
        errors.push(ValidationError::EmptyCallbackParam);
    }

    for ch in name.chars() {
        if RESERVED.contains(&ch) || ch.is_whitespace() || ch.is_control() {
            errors.push(ValidationError::ReservedCharacter {
                name: name.clone(),
                ch,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
