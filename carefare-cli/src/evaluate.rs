//! Evaluate command implementation for the Carefare CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use carefare_core::{AnswerSet, Gazetteer};
use carefare_scorer::Engine;
use clap::Parser;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalog::load_catalog;
use crate::fs::open_utf8_file;
use crate::{
    ARG_CATALOG, ARG_COMPACT, ARG_EVALUATE_ANSWERS, CliError, ENV_EVALUATE_ANSWERS,
    require_existing, write_json,
};

/// CLI arguments for the `evaluate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "evaluate",
    long_about = "Evaluate a completed questionnaire. The answers are read \
                 from a JSON object keyed by question identifier; the \
                 recommended vehicles, fares, required documents and \
                 follow-up advice are printed as JSON.",
    about = "Recommend vehicles and fares for a questionnaire"
)]
#[ortho_config(prefix = "CAREFARE")]
pub(crate) struct EvaluateArgs {
    /// Path to a JSON file containing the questionnaire answers.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) answers_path: Option<Utf8PathBuf>,
    /// Replace the built-in vehicle catalog with a JSON file.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Print single-line JSON.
    #[arg(long = ARG_COMPACT)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) compact: bool,
}

impl EvaluateArgs {
    pub(crate) fn into_config(self) -> Result<EvaluateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        EvaluateConfig::try_from(merged)
    }
}

/// Resolved `evaluate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EvaluateConfig {
    /// Path to the JSON answers file.
    pub(crate) answers_path: Utf8PathBuf,
    /// Optional replacement catalog.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Whether to print single-line JSON.
    pub(crate) compact: bool,
}

impl EvaluateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.answers_path, ARG_EVALUATE_ANSWERS)?;
        if let Some(catalog) = &self.catalog {
            require_existing(catalog, ARG_CATALOG)?;
        }
        Ok(())
    }
}

impl TryFrom<EvaluateArgs> for EvaluateConfig {
    type Error = CliError;

    fn try_from(args: EvaluateArgs) -> Result<Self, Self::Error> {
        let answers_path = args.answers_path.ok_or(CliError::MissingArgument {
            field: ARG_EVALUATE_ANSWERS,
            env: ENV_EVALUATE_ANSWERS,
        })?;
        Ok(Self {
            answers_path,
            catalog: args.catalog,
            compact: args.compact,
        })
    }
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_evaluate_with(args, &mut stdout)
}

pub(crate) fn run_evaluate_with(args: EvaluateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;

    let answers = load_answers(&config.answers_path)?;
    let catalog = load_catalog(config.catalog.as_deref())?;
    info!(
        "evaluating {} answers against {} vehicles",
        answers.len(),
        catalog.len()
    );

    let engine = Engine::new(&catalog, Gazetteer::default());
    let evaluation = engine.evaluate(&answers);
    debug!(
        "shortlisted {} vehicles under {:?}",
        evaluation.quotes.len(),
        evaluation.service.tier
    );
    write_json(writer, &evaluation, config.compact)
}

/// Loads a JSON-encoded [`AnswerSet`] from disk.
pub(crate) fn load_answers(path: &Utf8Path) -> Result<AnswerSet, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenAnswers {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseAnswers {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<EvaluateConfig, CliError> {
    let merged = EvaluateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    EvaluateConfig::try_from(merged)
}
