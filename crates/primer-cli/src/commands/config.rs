//! Config command implementation.
//!
//! Locates, shows and validates the TOML configuration.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use primer_config::{ConfigError, PrimerConfig, DEFAULT_CONFIG_FILE};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_error, print_header, print_success, print_warning};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Validate the configuration file
    Validate,

    /// Show which configuration file is in use
    Path,

    /// Write the default configuration to a file
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Destination (defaults to ./primer.toml)
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults.
    Defaults,
    /// A TOML file.
    File(PathBuf),
}

/// Finds the configuration file: an explicit path, then `./primer.toml`, then
/// `primer/primer.toml` under the user config directory.
pub fn locate(explicit: Option<&Path>) -> Result<ConfigSource> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(CliError::ConfigNotFound(path.to_path_buf()).into());
        }
        return Ok(ConfigSource::File(path.to_path_buf()));
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return Ok(ConfigSource::File(local));
    }

    if let Some(user) = dirs::config_dir().map(|d| d.join("primer").join(DEFAULT_CONFIG_FILE)) {
        if user.exists() {
            return Ok(ConfigSource::File(user));
        }
    }

    Ok(ConfigSource::Defaults)
}

/// Loads the effective configuration.
pub fn load(explicit: Option<&Path>) -> Result<(PrimerConfig, ConfigSource)> {
    let source = locate(explicit)?;
    let config = match &source {
        ConfigSource::Defaults => PrimerConfig::default(),
        ConfigSource::File(path) => PrimerConfig::from_file(path)?,
    };
    tracing::info!(source = ?source, "configuration loaded");
    Ok((config, source))
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, explicit: Option<&Path>, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(explicit, format),
        ConfigCommand::Validate => validate(explicit),
        ConfigCommand::Path => path(explicit, format),
        ConfigCommand::Init(init_args) => init(init_args),
    }
}

fn show(explicit: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (config, source) = load(explicit)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Table => {
            print_header(&match &source {
                ConfigSource::Defaults => "Configuration (built-in defaults)".to_string(),
                ConfigSource::File(p) => format!("Configuration ({})", p.display()),
            });
            println!("{}", config.to_toml_string()?);
        }
        OutputFormat::Csv | OutputFormat::Minimal => print!("{}", config.to_toml_string()?),
    }
    Ok(())
}

fn validate(explicit: Option<&Path>) -> Result<()> {
    let source = locate(explicit)?;
    let ConfigSource::File(path) = source else {
        print_success("No configuration file; built-in defaults are valid");
        return Ok(());
    };

    match PrimerConfig::from_file(&path) {
        Ok(_) => {
            print_success(&format!("{} is valid", path.display()));
            Ok(())
        }
        Err(ConfigError::Validation { field, message }) => {
            print_error(&format!("{field}: {message}"));
            Err(CliError::InvalidConfig(1).into())
        }
        Err(ConfigError::MultipleValidationErrors(errors)) => {
            for err in &errors {
                print_error(&err.to_string());
            }
            Err(CliError::InvalidConfig(errors.len()).into())
        }
        Err(other) => Err(other.into()),
    }
}

fn path(explicit: Option<&Path>, format: OutputFormat) -> Result<()> {
    match locate(explicit)? {
        ConfigSource::File(p) => println!("{}", p.display()),
        ConfigSource::Defaults => {
            if format == OutputFormat::Table {
                print_warning("No configuration file found; using built-in defaults");
            }
        }
    }
    Ok(())
}

fn init(args: InitArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    if path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }
    PrimerConfig::default().save(&path)?;
    print_success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}
