//! Error types emitted by the Carefare CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use carefare_core::CatalogError;
use thiserror::Error;

/// Errors emitted by the Carefare CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the answers file failed.
    #[error("failed to open answers at {path:?}: {source}")]
    OpenAnswers {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The answers JSON could not be decoded.
    #[error("failed to parse answers JSON at {path:?}: {source}")]
    ParseAnswers {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Opening the catalog file failed.
    #[error("failed to open vehicle catalog at {path:?}: {source}")]
    OpenCatalog {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog file could not be decoded or failed validation.
    #[error("failed to load vehicle catalog from {path:?}: {source}")]
    LoadCatalog {
        path: Utf8PathBuf,
        #[source]
        source: CatalogError,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    Serialise(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
