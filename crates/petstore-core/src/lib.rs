//! Domain model for the pet store API.
//!
//! Defines the [`Pet`] record and its parts, the [`PetId`] newtype, and the
//! comma-separated query filters used by the find endpoints.

pub mod error;
pub mod filter;
pub mod id;
pub mod model;

// Re-export commonly used types
pub use error::CoreError;
pub use filter::{StatusFilter, TagFilter};
pub use id::PetId;
pub use model::{Category, Pet, PetStatus, Tag};
