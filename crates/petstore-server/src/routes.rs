//! The route table for the pet resource.
//!
//! Each [`RouteSpec`] names a method, a path, the operation metadata that
//! goes into the OpenAPI document, and a constructor for the axum handler.
//! [`crate::router::build_router`] and [`crate::openapi::openapi_document`]
//! both read [`PET_ROUTES`], so the served API and its description cannot
//! drift apart.

use axum::routing::{on, MethodFilter, MethodRouter};

use crate::handlers;
use crate::state::AppState;

/// HTTP methods used by the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }

    pub fn filter(self) -> MethodFilter {
        match self {
            HttpMethod::Get => MethodFilter::GET,
            HttpMethod::Post => MethodFilter::POST,
            HttpMethod::Put => MethodFilter::PUT,
        }
    }
}

/// Where a parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
}

/// A documented request parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub location: ParamLocation,
    pub required: bool,
    pub description: &'static str,
    /// JSON schema of the raw parameter value.
    pub schema: ParamSchema,
}

/// Schema of a parameter as documented.
#[derive(Debug, Clone, Copy)]
pub enum ParamSchema {
    /// A 64-bit integer.
    Int64,
    /// Comma-separated list of the given values, with an optional default.
    CsvEnum {
        values: &'static [&'static str],
        default: Option<&'static str>,
    },
    /// Comma-separated free-form strings.
    CsvString,
}

/// Shape of a successful response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseBody {
    Pet,
    PetList,
    /// The literal string `"SUCCESS"`.
    Success,
}

/// One entry in the route table.
#[derive(Clone, Copy)]
pub struct RouteSpec {
    pub method: HttpMethod,
    /// axum path syntax, which matches OpenAPI path templating.
    pub path: &'static str,
    pub operation_id: &'static str,
    pub summary: &'static str,
    pub description: Option<&'static str>,
    pub deprecated: bool,
    pub params: &'static [ParamSpec],
    /// Whether the route takes a JSON `Pet` body.
    pub pet_body: bool,
    pub response: ResponseBody,
    /// Documented error statuses and reasons.
    pub errors: &'static [(u16, &'static str)],
    pub handler: fn(MethodFilter) -> MethodRouter<AppState>,
}

impl RouteSpec {
    /// Builds the axum method router for this entry.
    pub fn method_router(&self) -> MethodRouter<AppState> {
        (self.handler)(self.method.filter())
    }
}

impl std::fmt::Debug for RouteSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteSpec")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("operation_id", &self.operation_id)
            .finish_non_exhaustive()
    }
}

pub const STATUS_VALUES: &[&str] = &["available", "pending", "sold"];

/// Every `/pet` route served by the API.
pub static PET_ROUTES: &[RouteSpec] = &[
    RouteSpec {
        method: HttpMethod::Get,
        path: "/pet/findByStatus",
        operation_id: "findPetsByStatus",
        summary: "Finds Pets by status",
        description: Some("Multiple status values can be provided with comma separated strings"),
        deprecated: false,
        params: &[ParamSpec {
            name: "status",
            location: ParamLocation::Query,
            required: false,
            description: "Status values that need to be considered for filter",
            schema: ParamSchema::CsvEnum {
                values: STATUS_VALUES,
                default: Some("available"),
            },
        }],
        pet_body: false,
        response: ResponseBody::PetList,
        errors: &[(400, "Invalid status value")],
        handler: find_pets_by_status_route,
    },
    RouteSpec {
        method: HttpMethod::Get,
        path: "/pet/findByTags",
        operation_id: "findPetsByTags",
        summary: "Finds Pets by tags",
        description: Some(
            "Multiple tags can be provided with comma separated strings. \
             Use tag1, tag2, tag3 for testing.",
        ),
        deprecated: true,
        params: &[ParamSpec {
            name: "tags",
            location: ParamLocation::Query,
            required: true,
            description: "Tags to filter by",
            schema: ParamSchema::CsvString,
        }],
        pet_body: false,
        response: ResponseBody::PetList,
        errors: &[(400, "Invalid tag value")],
        handler: find_pets_by_tags_route,
    },
    RouteSpec {
        method: HttpMethod::Get,
        path: "/pet/{petId}",
        operation_id: "getPetById",
        summary: "Find pet by ID",
        description: Some(
            "Returns the stored pet. Unknown ids return a placeholder pet \
             unless the server runs in strict lookup mode.",
        ),
        deprecated: false,
        params: &[ParamSpec {
            name: "petId",
            location: ParamLocation::Path,
            required: true,
            description: "ID of pet that needs to be fetched",
            schema: ParamSchema::Int64,
        }],
        pet_body: false,
        response: ResponseBody::Pet,
        errors: &[(400, "Invalid ID supplied"), (404, "Pet not found")],
        handler: get_pet_route,
    },
    RouteSpec {
        method: HttpMethod::Post,
        path: "/pet",
        operation_id: "addPet",
        summary: "Add a new pet to the store",
        description: None,
        deprecated: false,
        params: &[],
        pet_body: true,
        response: ResponseBody::Success,
        errors: &[(405, "Invalid input")],
        handler: add_pet_route,
    },
    RouteSpec {
        method: HttpMethod::Put,
        path: "/pet",
        operation_id: "updatePet",
        summary: "Update an existing pet",
        description: None,
        deprecated: false,
        params: &[],
        pet_body: true,
        response: ResponseBody::Success,
        errors: &[(405, "Validation exception")],
        handler: update_pet_route,
    },
];

fn find_pets_by_status_route(filter: MethodFilter) -> MethodRouter<AppState> {
    on(filter, handlers::pets::find_pets_by_status)
}

fn find_pets_by_tags_route(filter: MethodFilter) -> MethodRouter<AppState> {
    on(filter, handlers::pets::find_pets_by_tags)
}

fn get_pet_route(filter: MethodFilter) -> MethodRouter<AppState> {
    on(filter, handlers::pets::get_pet)
}

fn add_pet_route(filter: MethodFilter) -> MethodRouter<AppState> {
    on(filter, handlers::pets::add_pet)
}

fn update_pet_route(filter: MethodFilter) -> MethodRouter<AppState> {
    on(filter, handlers::pets::update_pet)
}
