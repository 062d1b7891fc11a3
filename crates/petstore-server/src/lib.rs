//! HTTP/JSON API server for the pet store.
//!
//! Exposes the `/pet` resource over axum, backed by an injectable
//! [`petstore_storage::PetStore`]. Routing and the OpenAPI description are
//! both generated from the route table in [`routes`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
