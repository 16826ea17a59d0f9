//! APB metadata parsing and schema extraction
//!
//! This crate loads an Ansible Playbook Bundle descriptor (`apb.yml`) and
//! turns the parameter lists of its plans into a `SchemaFragment`.
//!
//! ## Conversion Strategy
//!
//! For each category (`parameters`, `bind_parameters`):
//! - descriptors are gathered across all plans, in plan order
//! - each `name` is rewritten from snake_case to camelCase
//! - the last descriptor for a property name wins its type and description
//! - the last explicit `required` boolean for a name decides membership

pub mod apb;
mod naming;

pub use apb::{extract_params, ApbMetadata, ApbParser, Plan};
pub use naming::to_camel_case;

use apb_openapi_common::{Category, Result, SchemaFragment};
use std::path::Path;

/// Load `apb.yml` from `path` and convert one category of parameters
///
/// # Arguments
/// * `path` - Location of the APB descriptor
/// * `category` - Which parameter list to convert
///
/// # Returns
/// * `SchemaFragment` - Properties and required names for that category
pub fn convert_apb_file<P: AsRef<Path>>(path: P, category: Category) -> Result<SchemaFragment> {
    let parser = ApbParser::from_file(path)?;
    parser.convert(category)
}
