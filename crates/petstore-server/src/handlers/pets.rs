//! Pet resource handlers (get, add, update, find by status, find by tags).

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::header::{HeaderName, WARNING};
use axum::Json;

use petstore_core::{Pet, PetId, StatusFilter, TagFilter};

use crate::error::ApiError;
use crate::schema::pets::{
    FindByStatusQuery, FindByTagsQuery, DEPRECATION_HEADER_VALUE, FIND_BY_TAGS_WARNING, SUCCESS,
};
use crate::state::AppState;

const DEPRECATION: HeaderName = HeaderName::from_static("deprecation");

/// Finds a pet by id.
///
/// `GET /pet/{petId}`
pub async fn get_pet(
    State(state): State<AppState>,
    pet_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Pet>, ApiError> {
    let Path(pet_id) = pet_id?;
    let id: PetId = pet_id.parse()?;
    let service = state.service.lock().await;
    let pet = service.get_pet(id)?;
    tracing::debug!(pet_id = %id, "fetched pet");
    Ok(Json(pet))
}

/// Adds a new pet to the store.
///
/// `POST /pet`
pub async fn add_pet(
    State(state): State<AppState>,
    body: Result<Json<Pet>, JsonRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let Json(pet) = body?;
    let mut service = state.service.lock().await;
    service.put_pet(pet)?;
    Ok(Json(SUCCESS))
}

/// Updates an existing pet. Stores exactly like [`add_pet`].
///
/// `PUT /pet`
pub async fn update_pet(
    State(state): State<AppState>,
    body: Result<Json<Pet>, JsonRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let Json(pet) = body?;
    let mut service = state.service.lock().await;
    service.put_pet(pet)?;
    Ok(Json(SUCCESS))
}

/// Finds pets by comma-separated status values.
///
/// `GET /pet/findByStatus?status=available,sold`
pub async fn find_pets_by_status(
    State(state): State<AppState>,
    query: Result<Query<FindByStatusQuery>, QueryRejection>,
) -> Result<Json<Vec<Pet>>, ApiError> {
    let Query(query) = query?;
    let filter = StatusFilter::parse(query.status.as_deref())?;
    let service = state.service.lock().await;
    let pets = service.find_by_status(&filter)?;
    tracing::debug!(statuses = ?filter.statuses(), found = pets.len(), "find by status");
    Ok(Json(pets))
}

/// Finds pets by comma-separated tag names. Deprecated.
///
/// `GET /pet/findByTags?tags=tag1,tag2`
///
/// Responds with `Deprecation` and `Warning` headers alongside the results.
pub async fn find_pets_by_tags(
    State(state): State<AppState>,
    query: Result<Query<FindByTagsQuery>, QueryRejection>,
) -> Result<([(HeaderName, &'static str); 2], Json<Vec<Pet>>), ApiError> {
    let Query(query) = query?;
    let filter = TagFilter::parse(query.tags.as_deref())?;
    tracing::warn!(tags = ?filter.tags(), "deprecated endpoint findByTags called");
    let service = state.service.lock().await;
    let pets = service.find_by_tags(&filter)?;
    Ok((
        [
            (DEPRECATION, DEPRECATION_HEADER_VALUE),
            (WARNING, FIND_BY_TAGS_WARNING),
        ],
        Json(pets),
    ))
}
