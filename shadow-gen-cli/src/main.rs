//! # shadow-gen
//!
//! CLI tool for generating mutable shadow companions for builder-constructed
//! model classes.
//!
//! ## Usage
//!
//! ```bash
//! # Generate shadows from ./schema into ./src
//! shadow-gen generate
//!
//! # Generate into a specific output directory
//! shadow-gen generate --output ./generated
//!
//! # Restrict to namespaces
//! shadow-gen generate -n flex::component -n flex::container
//!
//! # Dry run to preview changes
//! shadow-gen generate --dry-run
//!
//! # List classes and whether they qualify
//! shadow-gen list
//!
//! # Initialize configuration
//! shadow-gen init
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use shadow_gen::{ClassKind, DriverProvider, SchemaRegistry};
use shadow_gen_cli::{
    config::{CliArgs, Config, ConfigManager, CONFIG_FILENAME},
    error::{CliError, ConfigError},
    loader::SchemaLoader,
    writer::DirectorySink,
};

#[derive(Parser)]
#[command(name = "shadow-gen")]
#[command(author, version, about = "Generate mutable shadow companions for builder-constructed models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shadow companions from schema documents
    Generate {
        /// Schema file or directory
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Output root directory for generated modules
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Namespaces to generate for (defaults to every namespace)
        #[arg(short, long = "namespace")]
        namespaces: Vec<String>,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List classes found in the schema documents
    List {
        /// Schema file or directory
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a new shadow-gen configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate {
            schema,
            output,
            namespaces,
            dry_run,
            config,
        } => cmd_generate(schema, output, namespaces, dry_run, config),

        Commands::List { schema, config } => cmd_list(schema, config),

        Commands::Init { output, force } => cmd_init(output, force),
    }
}

/// Generate command implementation.
fn cmd_generate(
    schema: Option<PathBuf>,
    output: Option<PathBuf>,
    namespaces: Vec<String>,
    dry_run: bool,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            schema,
            output,
            namespaces,
        },
    );

    println!("{}", "Loading schema documents...".cyan());
    let registry = SchemaLoader::new(&config.schema.dir).load()?;
    println!(
        "  Found {} class(es) in {} namespace(s)",
        registry.len().to_string().green(),
        registry.namespaces().count().to_string().green()
    );

    let namespaces = target_namespaces(&config, &registry);

    println!("{}", "Generating shadow companions...".cyan());
    let provider = DriverProvider::new(config.overrides.to_overrides());
    let mut sink = DirectorySink::new(&config.output.dir, dry_run);
    let report = provider.create(&mut sink).run(&registry, &namespaces);

    for path in sink.written() {
        println!("{} Written {}", "✓".green(), path.display());
    }
    for path in sink.planned() {
        println!("{} Would write {}", "[dry-run]".yellow(), path.display());
    }
    for id in &report.skipped {
        println!("{} {} already generated, skipped", "-".yellow(), id);
    }
    for (id, error) in &report.errors {
        println!("{} {}: {}", "✗".red(), id, error);
    }

    println!(
        "{} generated, {} skipped, {} error(s)",
        report.generated.len().to_string().green(),
        report.skipped.len().to_string().yellow(),
        report.errors.len().to_string().red()
    );

    if report.is_clean() {
        Ok(())
    } else {
        Err(CliError::Generation(report.errors.len()))
    }
}

/// List command implementation.
fn cmd_list(schema: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            schema,
            ..Default::default()
        },
    );

    let registry = SchemaLoader::new(&config.schema.dir).load()?;

    for namespace in registry.namespaces().collect::<Vec<_>>() {
        println!("{}", namespace.bold());
        for id in registry.classes_in(namespace) {
            let Some(class) = registry.resolve(&id) else {
                continue;
            };
            let qualifies = class.kind == ClassKind::Concrete && class.has_builder;
            if qualifies {
                println!("  {} {}", "✓".green(), id.name);
            } else {
                println!("  {} {} {}", "-".dimmed(), id.name, "(no shadow)".dimmed());
            }
        }
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        return Err(ConfigError::AlreadyExists { path: output }.into());
    }

    std::fs::write(&output, ConfigManager::default_config_content()).map_err(|e| {
        ConfigError::Io {
            path: output.clone(),
            source: e,
        }
    })?;

    println!("{} Created {}", "✓".green(), output.display());
    Ok(())
}

/// Namespaces a pass should cover: configured scope, or everything loaded.
fn target_namespaces(config: &Config, registry: &SchemaRegistry) -> Vec<String> {
    if config.generation.namespaces.is_empty() {
        registry.namespaces().map(String::from).collect()
    } else {
        config.generation.namespaces.clone()
    }
}
