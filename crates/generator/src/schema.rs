//! OpenAPI v3 validation envelope
//!
//! Mirrors the `validation.openAPIv3Schema` block of a CRD-style resource,
//! with the converted parameters nested under `properties.spec`.

use apb_openapi_common::{PropertySchema, SchemaFragment};
use indexmap::IndexMap;
use serde::Serialize;

/// Root of the emitted schema for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDocument {
    pub validation: Validation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    #[serde(rename = "openAPIv3Schema")]
    pub open_api_v3_schema: OpenApiV3Schema,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenApiV3Schema {
    pub properties: RootProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootProperties {
    pub spec: SpecSchema,
}

/// The `spec` object holding the converted parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecSchema {
    pub required: Vec<String>,
    pub properties: IndexMap<String, PropertySchema>,
}

impl From<&SchemaFragment> for ValidationDocument {
    fn from(fragment: &SchemaFragment) -> Self {
        Self {
            validation: Validation {
                open_api_v3_schema: OpenApiV3Schema {
                    properties: RootProperties {
                        spec: SpecSchema {
                            required: fragment.required_names(),
                            properties: fragment.properties().clone(),
                        },
                    },
                },
            },
        }
    }
}

impl ValidationDocument {
    /// Shortcut to the `spec` schema
    pub fn spec(&self) -> &SpecSchema {
        &self.validation.open_api_v3_schema.properties.spec
    }
}
