//! Schema fragment built from one category of parameters

use crate::Requirement;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Type and description of a single schema property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub property_type: String,
    pub description: String,
}

/// Record of a property whose type was replaced by a later descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOverride {
    pub property: String,
    pub previous: String,
    pub current: String,
}

/// Properties and required names produced for one category
///
/// Both maps keep the position of a name's first insertion. A later write
/// for the same name replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaFragment {
    properties: IndexMap<String, PropertySchema>,
    requirements: IndexMap<String, Requirement>,
    overrides: Vec<TypeOverride>,
}

impl SchemaFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite a property
    pub fn set_property(&mut self, name: &str, schema: PropertySchema) {
        if let Some(previous) = self.properties.get(name) {
            if previous.property_type != schema.property_type {
                self.overrides.push(TypeOverride {
                    property: name.to_string(),
                    previous: previous.property_type.clone(),
                    current: schema.property_type.clone(),
                });
            }
        }
        self.properties.insert(name.to_string(), schema);
    }

    /// Apply an explicit required flag to a property name
    ///
    /// `Required` marks the name; `NotRequired` clears it only if it is
    /// currently marked; `Unset` is a no-op.
    pub fn apply_requirement(&mut self, name: &str, requirement: Requirement) {
        match requirement {
            Requirement::Required => {
                self.requirements
                    .insert(name.to_string(), Requirement::Required);
            },
            Requirement::NotRequired => {
                if let Some(flag) = self.requirements.get_mut(name) {
                    *flag = Requirement::NotRequired;
                }
            },
            Requirement::Unset => {},
        }
    }

    pub fn properties(&self) -> &IndexMap<String, PropertySchema> {
        &self.properties
    }

    pub fn is_required(&self, name: &str) -> bool {
        matches!(self.requirements.get(name), Some(Requirement::Required))
    }

    /// Required property names, in order of first insertion
    pub fn required_names(&self) -> Vec<String> {
        self.requirements
            .iter()
            .filter(|(_, flag)| matches!(flag, Requirement::Required))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Properties whose type changed because of a name collision
    pub fn type_overrides(&self) -> &[TypeOverride] {
        &self.overrides
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
