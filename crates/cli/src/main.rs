//! APB OpenAPI CLI
//!
//! Command-line interface for converting the parameters of an APB
//! descriptor into OpenAPI v3 validation schemas.

use anyhow::{Context, Result};
use apb_openapi_common::Category;
use apb_openapi_generator::{OpenApiSchemaGenerator, OutputFormat};
use apb_openapi_parser::{extract_params, ApbParser};
use clap::{Parser, ValueEnum};
use colored::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apb-openapi")]
#[command(version, about = "Convert APB parameters to an OpenAPI v3 validation schema", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    # Convert ./apb.yml\n  \
    apb-openapi\n\n  \
    # Convert only bind parameters, as JSON\n  \
    apb-openapi --category bind-parameters --format json\n\n  \
    # Use a descriptor elsewhere\n  \
    apb-openapi --input ./postgresql-apb/apb.yml")]
struct Cli {
    /// Path to the APB descriptor
    #[arg(short, long, default_value = "apb.yml")]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Yaml)]
    format: FormatArg,

    /// Parameter category to convert (repeatable; defaults to all)
    #[arg(short, long = "category", value_enum)]
    categories: Vec<CategoryArg>,

    /// Enable verbose output (written to stderr)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CategoryArg {
    /// Provision-time `parameters`
    Parameters,
    /// Bind-time `bind_parameters`
    BindParameters,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Parameters => Category::Parameters,
            CategoryArg::BindParameters => Category::BindParameters,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// YAML document
    Yaml,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Settings for a single conversion run
#[derive(Debug, Clone)]
struct DriverConfig {
    input: PathBuf,
    categories: Vec<Category>,
    format: OutputFormat,
    verbose: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("apb.yml"),
            categories: Category::ALL.to_vec(),
            format: OutputFormat::Yaml,
            verbose: false,
        }
    }
}

impl From<Cli> for DriverConfig {
    fn from(cli: Cli) -> Self {
        let categories = if cli.categories.is_empty() {
            Category::ALL.to_vec()
        } else {
            cli.categories.into_iter().map(Category::from).collect()
        };

        Self {
            input: cli.input,
            categories,
            format: cli.format.into(),
            verbose: cli.verbose,
        }
    }
}

fn main() -> Result<()> {
    let config = DriverConfig::from(Cli::parse());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)
}

/// Load the descriptor and write one schema per category to `out`
///
/// Each schema is written as soon as it is converted, so a failure in a
/// later category leaves the earlier output in place.
fn run<W: Write>(config: &DriverConfig, out: &mut W) -> Result<()> {
    if config.verbose {
        eprintln!(
            "{} Reading APB descriptor: {}",
            "→".cyan(),
            config.input.display()
        );
    }

    let parser = ApbParser::from_file(&config.input).context("Failed to load APB descriptor")?;

    if config.verbose {
        eprintln!(
            "{} Loaded {} plan(s)",
            "✓".green(),
            parser.metadata().plans.len()
        );
        eprintln!("  Format: {}", config.format);
    }

    for &category in &config.categories {
        writeln!(out, "Converting {} to OpenAPI spec", category)?;

        let descriptors = parser.metadata().descriptors(category);
        let fragment = extract_params(&descriptors)
            .with_context(|| format!("Failed to convert {}", category))?;

        if config.verbose {
            eprintln!(
                "{} {}: {} descriptor(s), {} properties, {} required",
                "✓".green(),
                category.to_string().yellow(),
                descriptors.len(),
                fragment.properties().len(),
                fragment.required_names().len()
            );
            for type_override in fragment.type_overrides() {
                eprintln!(
                    "{} {}: type of '{}' changed from {} to {}",
                    "⚠".yellow(),
                    category,
                    type_override.property,
                    type_override.previous,
                    type_override.current
                );
            }
        }

        let rendered = OpenApiSchemaGenerator::new(category, &fragment)
            .render(config.format)
            .with_context(|| format!("Failed to render {} schema", category))?;
        writeln!(out, "{}", rendered)?;
    }

    out.flush()?;
    Ok(())
}
