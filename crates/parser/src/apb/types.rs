//! APB descriptor type definitions
//!
//! Only the parts of `apb.yml` needed for schema extraction are modeled.

use apb_openapi_common::{Category, ParameterDescriptor};
use serde::{Deserialize, Deserializer, Serialize};

/// `apb.yml` document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApbMetadata {
    /// Bundle name
    #[serde(default)]
    pub name: Option<String>,

    /// Service plans
    pub plans: Vec<Plan>,
}

/// A single service plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    /// Plan name (e.g., "default", "prod")
    #[serde(default)]
    pub name: Option<String>,

    /// Provision-time parameters
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parameters: Vec<ParameterDescriptor>,

    /// Bind-time parameters
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bind_parameters: Vec<ParameterDescriptor>,
}

impl Plan {
    /// Parameter list for a category
    pub fn descriptors(&self, category: Category) -> &[ParameterDescriptor] {
        match category {
            Category::Parameters => &self.parameters,
            Category::BindParameters => &self.bind_parameters,
        }
    }
}

impl ApbMetadata {
    /// All descriptors of a category across every plan, in plan order
    pub fn descriptors(&self, category: Category) -> Vec<ParameterDescriptor> {
        self.plans
            .iter()
            .flat_map(|plan| plan.descriptors(category).iter().cloned())
            .collect()
    }
}

/// `parameters:` with no value is treated like a missing key
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ParameterDescriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ParameterDescriptor>>::deserialize(deserializer)?.unwrap_or_default())
}
