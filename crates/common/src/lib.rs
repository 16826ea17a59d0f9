//! Common types and utilities for the APB OpenAPI converter
//!
//! This crate contains the shared intermediate representation, error types,
//! and utilities used across the parser, generator, and CLI components.

mod descriptor;
mod fragment;

pub use descriptor::{ParameterDescriptor, Requirement};
pub use fragment::{PropertySchema, SchemaFragment, TypeOverride};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while converting APB parameters
#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Parameter #{index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConverterError>;

/// A top-level parameter grouping inside an APB plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Provision-time parameters (`parameters`)
    Parameters,
    /// Bind-time parameters (`bind_parameters`)
    BindParameters,
}

impl Category {
    /// Every category, in the order they are converted
    pub const ALL: [Category; 2] = [Category::Parameters, Category::BindParameters];

    /// Key used for this category in `apb.yml` and in the emitted document
    pub fn key(&self) -> &'static str {
        match self {
            Category::Parameters => "parameters",
            Category::BindParameters => "bind_parameters",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys() {
        assert_eq!(Category::Parameters.key(), "parameters");
        assert_eq!(Category::BindParameters.key(), "bind_parameters");
        assert_eq!(Category::BindParameters.to_string(), "bind_parameters");
    }

    #[test]
    fn test_category_order() {
        assert_eq!(
            Category::ALL,
            [Category::Parameters, Category::BindParameters]
        );
    }

    #[test]
    fn test_read_error_message() {
        let err = ConverterError::Read {
            path: "apb.yml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read apb.yml: not found");
    }

    #[test]
    fn test_missing_field_message() {
        let err = ConverterError::MissingField {
            index: 2,
            field: "name",
        };
        assert_eq!(
            err.to_string(),
            "Parameter #2 is missing required field 'name'"
        );
    }
}
