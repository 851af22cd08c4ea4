//! Catalog loading and the `catalog` subcommand.

use std::borrow::Cow;
use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use carefare_core::VehicleCatalog;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::open_utf8_file;
use crate::{ARG_CATALOG, ARG_COMPACT, CliError, require_existing, write_json};

/// CLI arguments for the `catalog` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "catalog", about = "Print the vehicle catalog as JSON")]
#[ortho_config(prefix = "CAREFARE")]
pub(crate) struct CatalogArgs {
    /// Validate and print this catalog file instead of the built-in one.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Print single-line JSON.
    #[arg(long = ARG_COMPACT)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) compact: bool,
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_catalog_with(args, &mut stdout)
}

pub(crate) fn run_catalog_with(args: CatalogArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    if let Some(path) = &merged.catalog {
        require_existing(path, ARG_CATALOG)?;
    }
    let catalog = load_catalog(merged.catalog.as_deref())?;
    write_json(writer, &*catalog, merged.compact)
}

/// Load the catalog at `path`, or borrow the built-in one when absent.
pub(crate) fn load_catalog(
    path: Option<&Utf8Path>,
) -> Result<Cow<'static, VehicleCatalog>, CliError> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(VehicleCatalog::builtin()));
    };
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = VehicleCatalog::from_json_reader(BufReader::new(file)).map_err(|source| {
        CliError::LoadCatalog {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!("loaded {} vehicles from {path}", catalog.len());
    Ok(Cow::Owned(catalog))
}
