//! Converts APB parameter descriptors to a SchemaFragment

use crate::naming::to_camel_case;
use apb_openapi_common::{
    ConverterError, ParameterDescriptor, PropertySchema, Result, SchemaFragment,
};

/// Build a schema fragment from an ordered list of parameter descriptors
///
/// Descriptors are applied in order. A later descriptor whose name maps to
/// the same property replaces its type and description, and the last
/// explicit `required` boolean for that property decides whether it is
/// required. A descriptor without `name` or `type` fails the whole list.
pub fn extract_params(descriptors: &[ParameterDescriptor]) -> Result<SchemaFragment> {
    let mut fragment = SchemaFragment::new();

    for (index, descriptor) in descriptors.iter().enumerate() {
        let name = descriptor
            .name
            .as_deref()
            .ok_or(ConverterError::MissingField {
                index,
                field: "name",
            })?;
        let param_type = descriptor
            .param_type
            .as_deref()
            .ok_or(ConverterError::MissingField {
                index,
                field: "type",
            })?;

        let property_name = to_camel_case(name);

        fragment.apply_requirement(&property_name, descriptor.required);
        fragment.set_property(
            &property_name,
            PropertySchema {
                property_type: param_type.to_string(),
                description: descriptor.schema_description(),
            },
        );
    }

    Ok(fragment)
}
