//! API schema types for request/response definitions.
//!
//! Pet bodies use [`petstore_core::Pet`] directly; this module holds the
//! query parameter types and fixed response values around them.

pub mod pets;
