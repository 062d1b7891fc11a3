//! Core error types for petstore-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! ways raw request input can fail to become domain values.

use thiserror::Error;

/// Core errors produced by the petstore-core crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A pet id could not be parsed as a 64-bit integer.
    #[error("invalid pet id: '{raw}'")]
    InvalidId { raw: String },

    /// A status value outside `available`, `pending`, `sold`.
    #[error("invalid status value: '{value}'")]
    InvalidStatus { value: String },

    /// The tag filter was missing or contained no usable tags.
    #[error("invalid tag value: {reason}")]
    InvalidTag { reason: String },

    /// A pet record failed validation.
    #[error("invalid pet: {reason}")]
    InvalidPet { reason: String },
}
