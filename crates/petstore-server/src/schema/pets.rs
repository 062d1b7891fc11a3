//! Query parameters and fixed responses for the `/pet` endpoints.

use serde::Deserialize;

/// Body returned by add and update.
pub const SUCCESS: &str = "SUCCESS";

/// Value of the `Deprecation` header on deprecated endpoints.
pub const DEPRECATION_HEADER_VALUE: &str = "true";

/// `Warning` header sent with `findByTags` results.
pub const FIND_BY_TAGS_WARNING: &str =
    "299 - \"findByTags is deprecated; use findByStatus instead\"";

/// Query for `GET /pet/findByStatus`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindByStatusQuery {
    /// Comma-separated statuses; defaults to `available`.
    pub status: Option<String>,
}

/// Query for `GET /pet/findByTags`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindByTagsQuery {
    /// Comma-separated tag names. Required.
    pub tags: Option<String>,
}
