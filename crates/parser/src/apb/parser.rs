//! APB descriptor file parser

use super::types::ApbMetadata;
use apb_openapi_common::{Category, ConverterError, Result, SchemaFragment};
use std::fs;
use std::path::Path;

/// APB descriptor parser
///
/// Reads `apb.yml` once and converts any of its parameter categories on
/// demand. JSON documents are accepted as well, since JSON is valid YAML.
pub struct ApbParser {
    /// Loaded descriptor
    metadata: ApbMetadata,
}

impl ApbParser {
    /// Load an APB descriptor from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = ApbParser::from_file("apb.yml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|source| ConverterError::Read {
                path: path.as_ref().display().to_string(),
                source,
            })?;

        Self::from_yaml(&content)
    }

    /// Parse an APB descriptor from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let metadata: ApbMetadata = serde_yaml::from_str(yaml)
            .map_err(|e| ConverterError::Parse(format!("Failed to parse APB YAML: {}", e)))?;

        Ok(Self { metadata })
    }

    /// Convert one category of parameters into a schema fragment
    pub fn convert(&self, category: Category) -> Result<SchemaFragment> {
        let descriptors = self.metadata.descriptors(category);
        super::converter::extract_params(&descriptors)
    }

    /// Get reference to the underlying descriptor
    pub fn metadata(&self) -> &ApbMetadata {
        &self.metadata
    }
}
