//! HTTP handler modules for the pet store API.
//!
//! Each sub-module implements thin handlers that parse requests, acquire the
//! service lock, delegate to [`crate::service::PetService`], and return JSON
//! responses. No business logic lives in handlers.

pub mod docs;
pub mod pets;
