//! OpenAPI 3.0 document generated from the route table.
//!
//! [`openapi_document`] walks a slice of [`RouteSpec`] entries and emits the
//! paths, parameters, bodies and responses they describe, plus the component
//! schemas for `Pet`, `Category`, `Tag` and `Error`.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

use crate::routes::{
    HttpMethod, ParamLocation, ParamSchema, ParamSpec, ResponseBody, RouteSpec, STATUS_VALUES,
};

pub const OPENAPI_VERSION: &str = "3.0.3";
pub const API_TITLE: &str = "Pet store";
pub const RESOURCE_TAG: &str = "pet";

const JSON_MEDIA_TYPE: &str = "application/json";

/// API information block.
#[derive(Debug, Clone, Serialize)]
pub struct ApiInfo {
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Root of the generated document.
#[derive(Debug, Clone, Serialize)]
pub struct OpenApiDocument {
    pub openapi: String,
    pub info: ApiInfo,
    pub tags: Vec<TagSpec>,
    pub paths: BTreeMap<String, PathItem>,
    pub components: Components,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagSpec {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Components {
    pub schemas: BTreeMap<String, Value>,
}

/// Operations available on one path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
}

impl PathItem {
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
        }
    }

    fn slot(&mut self, method: HttpMethod) -> &mut Option<Operation> {
        match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Put => &mut self.put,
        }
    }
}

/// A single endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    pub responses: BTreeMap<String, ResponseSpec>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub required: bool,
    pub description: String,
    pub schema: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
    pub description: String,
    pub required: bool,
    pub content: BTreeMap<String, MediaType>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaType {
    pub schema: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseSpec {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<BTreeMap<String, MediaType>>,
}

/// Builds the OpenAPI document for the given routes.
pub fn openapi_document(routes: &[RouteSpec]) -> OpenApiDocument {
    let mut paths: BTreeMap<String, PathItem> = BTreeMap::new();
    for route in routes {
        let item = paths.entry(route.path.to_string()).or_default();
        *item.slot(route.method) = Some(operation(route));
    }

    OpenApiDocument {
        openapi: OPENAPI_VERSION.to_string(),
        info: ApiInfo {
            title: API_TITLE.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: Some("In-memory pet resource".to_string()),
        },
        tags: vec![TagSpec {
            name: RESOURCE_TAG.to_string(),
            description: "Operations about pets".to_string(),
        }],
        paths,
        components: Components {
            schemas: component_schemas(),
        },
    }
}

fn operation(route: &RouteSpec) -> Operation {
    let mut responses = BTreeMap::new();
    responses.insert(
        "200".to_string(),
        ResponseSpec {
            description: "successful operation".to_string(),
            content: Some(json_content(response_schema(route.response))),
        },
    );
    for (status, reason) in route.errors {
        responses.insert(
            status.to_string(),
            ResponseSpec {
                description: reason.to_string(),
                content: Some(json_content(schema_ref("Error"))),
            },
        );
    }

    let request_body = route.pet_body.then(|| RequestBody {
        description: "Pet object that needs to be stored".to_string(),
        required: true,
        content: json_content(schema_ref("Pet")),
    });

    Operation {
        operation_id: route.operation_id.to_string(),
        summary: route.summary.to_string(),
        description: route.description.map(str::to_string),
        tags: vec![RESOURCE_TAG.to_string()],
        parameters: route.params.iter().map(parameter).collect(),
        request_body,
        responses,
        deprecated: route.deprecated,
    }
}

fn parameter(param: &ParamSpec) -> Parameter {
    let (schema, csv) = match param.schema {
        ParamSchema::Int64 => (json!({ "type": "integer", "format": "int64" }), false),
        ParamSchema::CsvEnum { values, default } => {
            let mut items = json!({ "type": "string", "enum": values });
            if let Some(default) = default {
                items["default"] = json!(default);
            }
            (json!({ "type": "array", "items": items }), true)
        }
        ParamSchema::CsvString => (
            json!({ "type": "array", "items": { "type": "string" } }),
            true,
        ),
    };
    let location = match param.location {
        ParamLocation::Path => "path",
        ParamLocation::Query => "query",
    };

    Parameter {
        name: param.name.to_string(),
        location: location.to_string(),
        required: param.required,
        description: param.description.to_string(),
        schema,
        style: csv.then(|| "form".to_string()),
        explode: csv.then_some(false),
    }
}

fn response_schema(body: ResponseBody) -> Value {
    match body {
        ResponseBody::Pet => schema_ref("Pet"),
        ResponseBody::PetList => json!({ "type": "array", "items": schema_ref("Pet") }),
        ResponseBody::Success => json!({ "type": "string", "enum": ["SUCCESS"] }),
    }
}

fn json_content(schema: Value) -> BTreeMap<String, MediaType> {
    BTreeMap::from([(JSON_MEDIA_TYPE.to_string(), MediaType { schema })])
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn component_schemas() -> BTreeMap<String, Value> {
    let id_name = |title: &str| {
        json!({
            "title": title,
            "type": "object",
            "required": ["name"],
            "properties": {
                "id": { "type": "integer", "format": "int64" },
                "name": { "type": "string" }
            }
        })
    };

    BTreeMap::from([
        (
            "Pet".to_string(),
            json!({
                "type": "object",
                "required": ["id", "name"],
                "properties": {
                    "id": { "type": "integer", "format": "int64" },
                    "name": { "type": "string", "example": "doggie" },
                    "category": schema_ref("Category"),
                    "photoUrls": { "type": "array", "items": { "type": "string" } },
                    "tags": { "type": "array", "items": schema_ref("Tag") },
                    "status": {
                        "type": "string",
                        "description": "pet status in the store",
                        "enum": STATUS_VALUES,
                        "default": "available"
                    }
                }
            }),
        ),
        ("Category".to_string(), id_name("Category")),
        ("Tag".to_string(), id_name("Tag")),
        (
            "Error".to_string(),
            json!({
                "type": "object",
                "required": ["success", "error"],
                "properties": {
                    "success": { "type": "boolean" },
                    "error": {
                        "type": "object",
                        "required": ["code", "message"],
                        "properties": {
                            "code": { "type": "string" },
                            "message": { "type": "string" }
                        }
                    }
                }
            }),
        ),
    ])
}
