//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::overrides::ConfigOverrides;
use crate::config::schema::DeviceType;

/// Validated configuration for photon library surrogate training
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "photonlib-config")]
#[command(version)]
#[command(about = "Validate and inspect photon library training configurations")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a configuration file and report warnings
    Validate(ValidateArgs),

    /// Display a loaded configuration
    Info(InfoArgs),

    /// Write a bundled configuration preset
    Init(InitArgs),

    /// Apply command-line overrides and print the effective configuration
    Resolve(ResolveArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file or preset name
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed configuration summary
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file or preset name
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Preset to write
    #[arg(short, long, default_value = "icarus_siren")]
    pub preset: String,

    /// Output path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the resolve command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ResolveArgs {
    /// Path to YAML configuration file or preset name
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override device type (cpu, cuda)
    #[arg(long)]
    pub device: Option<DeviceType>,

    /// Override dataset path
    #[arg(long)]
    pub dataset_path: Option<PathBuf>,

    /// Override dataset size
    #[arg(long)]
    pub dataset_size: Option<u64>,

    /// Override learning rate
    #[arg(long)]
    pub lr: Option<f64>,

    /// Keep (true) or drop (false) the learning rate scheduler
    #[arg(long)]
    pub schedule_lr: Option<bool>,

    /// Resume from the checkpoint counters
    #[arg(long)]
    pub resume: bool,

    /// Override maximum number of epochs
    #[arg(long)]
    pub max_epochs: Option<u64>,

    /// Stop after this many iterations
    #[arg(long)]
    pub max_iterations: Option<u64>,

    /// Override checkpoint file
    #[arg(long)]
    pub ckpt_file: Option<PathBuf>,

    /// Override log directory
    #[arg(long)]
    pub logdir: Option<String>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "yaml")]
    pub format: OutputFormat,
}

impl ResolveArgs {
    /// Collect the override flags
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            device: self.device,
            dataset_path: self.dataset_path.clone(),
            dataset_size: self.dataset_size,
            lr: self.lr,
            schedule_lr: self.schedule_lr,
            resume: self.resume.then_some(true),
            max_epochs: self.max_epochs,
            max_iterations: self.max_iterations,
            ckpt_file: self.ckpt_file.clone(),
            logdir: self.logdir.clone(),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
