//! Command-line interface for the Carefare transport engine.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;

mod catalog;
mod error;
mod evaluate;
mod fs;

pub use error::CliError;

use catalog::{CatalogArgs, run_catalog};
use evaluate::{EvaluateArgs, run_evaluate};

const ARG_EVALUATE_ANSWERS: &str = "answers";
const ARG_CATALOG: &str = "catalog";
const ARG_COMPACT: &str = "compact";
const ENV_EVALUATE_ANSWERS: &str = "CAREFARE_CMDS_EVALUATE_ANSWERS_PATH";

/// Run the Carefare CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Evaluate(args) => run_evaluate(args),
        Command::Catalog(args) => run_catalog(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "carefare",
    about = "Vehicle, fare and paperwork recommendations for accessible transport",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a completed questionnaire.
    Evaluate(EvaluateArgs),
    /// Print the vehicle catalog used for matching.
    Catalog(CatalogArgs),
}

/// Fail unless `path` names an existing regular file.
fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `value` as newline-terminated JSON.
fn write_json<T: Serialize>(
    writer: &mut dyn Write,
    value: &T,
    compact: bool,
) -> Result<(), CliError> {
    let payload = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .map_err(CliError::Serialise)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
