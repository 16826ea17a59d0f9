//! Integration test for schema generation

use apb_openapi_common::Category;
use apb_openapi_generator::{OpenApiSchemaGenerator, OutputFormat};
use apb_openapi_parser::apb::ApbParser;

const MEDIAWIKI_APB: &str = r#"
name: mediawiki-apb
plans:
  - name: default
    parameters:
      - name: mediawiki_db_schema
        default: mediawiki
        type: string
        title: Mediawiki DB Schema
        required: true
      - name: mediawiki_site_name
        default: MediaWiki
        type: string
        title: Mediawiki Site Name
        required: true
        updatable: true
      - name: mediawiki_site_lang
        default: en
        type: string
        title: Mediawiki Site Language
      - name: mediawiki_admin_pass
        type: string
        description: Password for the admin user
        title: Mediawiki Admin User Password
        display_type: password
        required: true
"#;

#[test]
fn test_generate_mediawiki_parameters() {
    let parser = ApbParser::from_yaml(MEDIAWIKI_APB).expect("Failed to parse APB");
    let fragment = parser.convert(Category::Parameters).unwrap();

    let generator = OpenApiSchemaGenerator::new(Category::Parameters, &fragment);
    let yaml = generator.render(OutputFormat::Yaml).unwrap();

    assert!(yaml.starts_with("parameters:\n"));
    assert!(yaml.contains("openAPIv3Schema:"));

    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    let spec = &value["parameters"]["validation"]["openAPIv3Schema"]["properties"]["spec"];

    let required: Vec<&str> = spec["required"]
        .as_sequence()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(
        required,
        vec!["mediawikiDbSchema", "mediawikiSiteName", "mediawikiAdminPass"]
    );

    let properties = spec["properties"].as_mapping().unwrap();
    assert_eq!(properties.len(), 4);
    assert_eq!(
        spec["properties"]["mediawikiSiteLang"]["description"].as_str(),
        Some("Mediawiki Site Language")
    );
    assert_eq!(
        spec["properties"]["mediawikiAdminPass"]["description"].as_str(),
        Some("Password for the admin user")
    );
}

#[test]
fn test_generate_absent_bind_parameters() {
    let parser = ApbParser::from_yaml(MEDIAWIKI_APB).unwrap();
    let fragment = parser.convert(Category::BindParameters).unwrap();

    let json = OpenApiSchemaGenerator::new(Category::BindParameters, &fragment)
        .render(OutputFormat::Json)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "bind_parameters": {
                "validation": {
                    "openAPIv3Schema": {
                        "properties": {
                            "spec": {
                                "required": [],
                                "properties": {}
                            }
                        }
                    }
                }
            }
        })
    );
}

#[test]
fn test_yaml_and_json_agree() {
    let parser = ApbParser::from_yaml(MEDIAWIKI_APB).unwrap();
    let fragment = parser.convert(Category::Parameters).unwrap();
    let generator = OpenApiSchemaGenerator::new(Category::Parameters, &fragment);

    let from_yaml: serde_json::Value =
        serde_yaml::from_str(&generator.render(OutputFormat::Yaml).unwrap()).unwrap();
    let from_json: serde_json::Value =
        serde_json::from_str(&generator.render(OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(from_yaml, from_json);
}
