//! Storage abstraction for pet records.
//!
//! Provides the [`PetStore`] trait defining the storage contract, the
//! [`InMemoryStore`] backend, and the sample data the server can start with.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum
//! - [`traits`]: PetStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`seed`]: sample pets for a freshly started store

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use seed::sample_pets;
pub use traits::PetStore;
