use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jslib_core::storage::ConfigFormat;

/// jslib: build conventions for Jenkins pipeline shared libraries
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Settings file (defaults to jslib.toml, .yaml, .yml or .json in the project directory)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Root directory of the shared library
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the wired project: versions, source sets, buckets and tasks
    Describe {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the dependencies declared on each bucket
    Dependencies,
    /// Resolve a bucket against a fixture repository
    Resolve {
        /// Bucket to resolve, e.g. jenkinsPluginHpisAndJpis
        bucket: String,
        /// Fixture repository file (JSON, YAML or TOML)
        #[arg(long)]
        repository: PathBuf,
        /// Print file names instead of notations
        #[arg(long)]
        files: bool,
    },
    /// Print the order in which tasks would run
    Plan {
        /// Tasks to run
        #[arg(required = true)]
        tasks: Vec<String>,
    },
    /// Write a settings file pinning every default version
    Init {
        #[arg(long, value_enum, default_value_t = SettingsFormat::Toml)]
        format: SettingsFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsFormat {
    Toml,
    Yaml,
    Json,
}

impl From<SettingsFormat> for ConfigFormat {
    fn from(format: SettingsFormat) -> Self {
        match format {
            SettingsFormat::Toml => ConfigFormat::Toml,
            SettingsFormat::Yaml => ConfigFormat::Yaml,
            SettingsFormat::Json => ConfigFormat::Json,
        }
    }
}
