//! Storage error types for petstore-storage.

use petstore_core::PetId;
use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// No pet is stored under the given id.
    #[error("pet not found: {0}")]
    PetNotFound(PetId),
}
