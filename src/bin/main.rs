//! querydef CLI - Compile report-query configurations to query-group markup
//!
//! Usage:
//!   querydef compile <config.json> [--output <file>] [--config <querydef.toml>]
//!   querydef layout <config.json>
//!   querydef check <config.json>
//!
//! Configurations may be JSON or TOML (chosen by file extension).

use clap::{Parser, Subcommand};
use log::info;
use querydef::compile::{compile_report, normalize_config, CompileOptions};
use querydef::config::Settings;
use querydef::layout::FieldKind;
use querydef::model::ReportQuery;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "querydef")]
#[command(about = "querydef - Compile report-query configurations to query-group definitions")]
#[command(version)]
struct Cli {
    /// Path to a querydef.toml settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a configuration to markup
    Compile {
        /// Path to the configuration file
        file: PathBuf,

        /// Write markup here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the layout field list of a configuration
    Layout {
        /// Path to the configuration file
        file: PathBuf,
    },

    /// Normalize a configuration without generating markup
    Check {
        /// Path to the configuration file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let options = match settings {
        Ok(settings) => CompileOptions::from(&settings.compiler),
        Err(e) => {
            eprintln!("Settings error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Compile { file, output } => cmd_compile(&file, output, &options),
        Commands::Layout { file } => cmd_layout(&file, &options),
        Commands::Check { file } => cmd_check(&file, &options),
    }
}

fn cmd_compile(file: &Path, output: Option<PathBuf>, options: &CompileOptions) -> ExitCode {
    let Some(config) = read_config(file) else {
        return ExitCode::FAILURE;
    };

    let compiled = match compile_report(&config, options) {
        Ok(compiled) => compiled,
        Err(e) => {
            eprintln!("Compilation error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &compiled.markup) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            info!(
                "wrote {} queries and {} layout fields to {}",
                compiled.queries.len(),
                compiled.layout.len(),
                path.display()
            );
        }
        None => print!("{}", compiled.markup),
    }
    ExitCode::SUCCESS
}

fn cmd_layout(file: &Path, options: &CompileOptions) -> ExitCode {
    let Some(config) = read_config(file) else {
        return ExitCode::FAILURE;
    };

    match compile_report(&config, options) {
        Ok(compiled) => {
            for field in &compiled.layout {
                let kind = match field.kind {
                    FieldKind::Key => "key",
                    FieldKind::Data => "data",
                };
                println!("{}\t{}", field.name, kind);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Compilation error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_check(file: &Path, options: &CompileOptions) -> ExitCode {
    let Some(config) = read_config(file) else {
        return ExitCode::FAILURE;
    };

    match normalize_config(&config, options) {
        Ok(queries) => {
            println!("OK: {} ({} queries)", file.display(), queries.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Validation error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Read and parse a configuration, reporting failures on stderr.
fn read_config(file: &Path) -> Option<ReportQuery> {
    let source = match fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", file.display(), e);
            return None;
        }
    };

    let is_toml = file.extension().is_some_and(|ext| ext == "toml");
    let parsed: Result<ReportQuery, String> = if is_toml {
        toml::from_str(&source).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&source).map_err(|e| e.to_string())
    };

    match parsed {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Error parsing '{}': {}", file.display(), e);
            None
        }
    }
}
