//! Parameter descriptors as they appear in `apb.yml`

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One parameter's metadata record from an APB plan
///
/// `name` and `type` are optional here so that a malformed descriptor still
/// loads; the schema extractor rejects it when the category is converted.
/// Keys other than the ones below are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Snake-case parameter name (e.g., "db_name")
    #[serde(default)]
    pub name: Option<String>,

    /// Type string, passed through unchanged (e.g., "string", "int")
    #[serde(rename = "type", default)]
    pub param_type: Option<String>,

    /// Explicit required flag
    #[serde(default, skip_serializing_if = "Requirement::is_unset")]
    pub required: Requirement,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Display title, used when there is no description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ParameterDescriptor {
    /// Create a descriptor with a name and type and nothing else
    pub fn new(name: &str, param_type: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            param_type: Some(param_type.to_string()),
            ..Self::default()
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Requirement::from(required);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Description shown in the schema: `description`, then `title`, then ""
    pub fn schema_description(&self) -> String {
        self.description
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

/// Tri-state `required` flag
///
/// Only the booleans `true` and `false` carry meaning. A missing key, `null`,
/// or any other value is `Unset` and leaves the required set untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Requirement {
    #[default]
    Unset,
    Required,
    NotRequired,
}

impl Requirement {
    pub fn is_unset(&self) -> bool {
        matches!(self, Requirement::Unset)
    }
}

impl From<bool> for Requirement {
    fn from(required: bool) -> Self {
        if required {
            Requirement::Required
        } else {
            Requirement::NotRequired
        }
    }
}

impl<'de> Deserialize<'de> for Requirement {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_yaml::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_yaml::Value::Bool(flag) => Requirement::from(flag),
            _ => Requirement::Unset,
        })
    }
}

impl Serialize for Requirement {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Requirement::Unset => serializer.serialize_none(),
            Requirement::Required => serializer.serialize_bool(true),
            Requirement::NotRequired => serializer.serialize_bool(false),
        }
    }
}
