//! OpenAPI schema generation for APB parameters
//!
//! This crate wraps a converted `SchemaFragment` in the OpenAPI v3
//! validation envelope and renders it as YAML or JSON.

mod schema;

pub use schema::{OpenApiV3Schema, RootProperties, SpecSchema, Validation, ValidationDocument};

use apb_openapi_common::{Category, Result, SchemaFragment};
use indexmap::IndexMap;
use std::fmt;

/// Serialization format for the emitted schema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "YAML"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

/// OpenAPI schema generator
///
/// Produces `{ <category>: { validation: { openAPIv3Schema: ... } } }` for a
/// single parameter category.
pub struct OpenApiSchemaGenerator {
    category: Category,
    document: ValidationDocument,
}

impl OpenApiSchemaGenerator {
    /// Create a generator for one category's fragment
    pub fn new(category: Category, fragment: &SchemaFragment) -> Self {
        Self {
            category,
            document: ValidationDocument::from(fragment),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn document(&self) -> &ValidationDocument {
        &self.document
    }

    /// Render the document tagged with its category key
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let mut tagged = IndexMap::new();
        tagged.insert(self.category.key(), &self.document);

        let rendered = match format {
            OutputFormat::Yaml => serde_yaml::to_string(&tagged)?,
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&tagged)?;
                json.push('\n');
                json
            },
        };

        Ok(rendered)
    }
}
