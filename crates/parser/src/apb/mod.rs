//! Ansible Playbook Bundle (APB) descriptor parser
//!
//! Parses `apb.yml` and converts the parameter lists of its plans into
//! OpenAPI v3 schema fragments.
//!
//! ## Input Shape
//! ```yaml
//! plans:
//!   - name: default
//!     parameters:
//!       - name: db_name
//!         type: string
//!         required: true
//!     bind_parameters:
//!       - name: bind_user
//!         type: string
//!         title: Bind user
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use apb_openapi_common::Category;
//! use apb_openapi_parser::apb::ApbParser;
//!
//! let parser = ApbParser::from_file("apb.yml")?;
//! let fragment = parser.convert(Category::Parameters)?;
//! ```

mod converter;
mod parser;
mod types;

pub use converter::extract_params;
pub use parser::ApbParser;
pub use types::*;
