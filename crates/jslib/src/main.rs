mod cli;
mod logging;

use std::error::Error as StdError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use cli::{CliArgs, Commands, SettingsFormat};
use jslib_core::kernel::ProjectReport;
use jslib_core::storage::{ConfigFormat, StorageSystemError};
use jslib_core::{Error, FixtureRepository, LibrarySettings, Project, Resolver, Result, SharedLibraryPlugin};

/// Settings files looked up in the project directory, in order
const SETTINGS_FILES: [&str; 4] = ["jslib.toml", "jslib.yaml", "jslib.yml", "jslib.json"];

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<()> {
    match &args.command {
        Commands::Init { format } => init_settings(&args.project_dir, *format),
        Commands::Describe { json } => {
            let project = load_project(&args)?;
            let report = project.report();
            if *json {
                println!("{}", to_json(&report)?);
            } else {
                print!("{}", report);
            }
            Ok(())
        }
        Commands::Dependencies => {
            let project = load_project(&args)?;
            for bucket in project.buckets().iter() {
                if bucket.dependencies().is_empty() {
                    continue;
                }
                println!("{}", bucket.name());
                for notation in bucket.dependencies() {
                    println!("  {}", notation);
                }
            }
            Ok(())
        }
        Commands::Resolve {
            bucket,
            repository,
            files,
        } => {
            let mut project = load_project(&args)?;
            let repository = FixtureRepository::from_file(repository)?;
            let mut resolver = Resolver::new(&repository);
            let resolved = project.resolve(&mut resolver, bucket)?;
            let lines = if *files { resolved.file_names() } else { resolved.notations() };
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }
        Commands::Plan { tasks } => {
            let project = load_project(&args)?;
            let requested: Vec<&str> = tasks.iter().map(String::as_str).collect();
            for task in project.execution_plan(&requested)? {
                println!("{}", task);
            }
            Ok(())
        }
    }
}

/// Build, configure and evaluate the project in `--project-dir`.
fn load_project(args: &CliArgs) -> Result<Project> {
    let project_dir = fs::canonicalize(&args.project_dir)
        .map_err(|e| Error::io(e, "canonicalize", args.project_dir.clone()))?;
    let name = project_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "shared-library".to_string());

    let mut project = Project::new(&name, &project_dir);
    project.apply_plugin(&SharedLibraryPlugin)?;

    if let Some(path) = settings_path(args, &project_dir) {
        info!("Using settings from {}", path.display());
        let settings = LibrarySettings::load(&path)?;
        project.apply_settings(&settings)?;
    } else {
        debug!("No settings file in {}", project_dir.display());
    }

    project.evaluate()?;
    Ok(project)
}

/// An explicit `--settings` wins; otherwise the first conventional file found.
fn settings_path(args: &CliArgs, project_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = &args.settings {
        return Some(path.clone());
    }
    SETTINGS_FILES
        .iter()
        .map(|file| project_dir.join(file))
        .find(|path| path.is_file())
}

fn init_settings(project_dir: &Path, format: SettingsFormat) -> Result<()> {
    let format = ConfigFormat::from(format);
    let path = project_dir.join(format!("jslib.{}", format.extension()));
    let project = Project::new("shared-library", project_dir);
    LibrarySettings::from_extension(project.extension()).save(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn to_json(report: &ProjectReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| {
        Error::from(StorageSystemError::SerializationError {
            format: "json".to_string(),
            source: Box::new(e),
        })
    })
}
