//! Focused unit tests covering evaluate CLI configuration and answer loading.

use super::helpers::{Workspace, wheelchair_hospital_answers, write_utf8};
use super::*;
use crate::evaluate::{
    EvaluateArgs, EvaluateConfig, config_from_layers_for_test, load_answers, run_evaluate_with,
};
use carefare_core::answers::keys;
use clap::CommandFactory;
use rstest::rstest;
use serde_json::{Map, Value};

/// The layer the parsed command line contributes: its serialised fields,
/// without the options the user left unset.
fn cli_layer(args: &EvaluateArgs) -> Value {
    let serialised = serde_json::to_value(args).expect("serialise arguments");
    let fields: Map<String, Value> = serialised
        .as_object()
        .expect("arguments serialise to an object")
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Value::Object(fields)
}

fn run_to_json(args: EvaluateArgs) -> Value {
    let mut buffer = Vec::new();
    run_evaluate_with(args, &mut buffer).expect("evaluation should succeed");
    serde_json::from_slice(&buffer).expect("output should be JSON")
}

#[rstest]
fn converting_evaluate_without_answers_errors() {
    let args = EvaluateArgs {
        answers_path: None,
        ..EvaluateArgs::default()
    };

    let err = EvaluateConfig::try_from(args).expect_err("missing answers should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_EVALUATE_ANSWERS);
            assert_eq!(env, ENV_EVALUATE_ANSWERS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::missing_answers(ARG_EVALUATE_ANSWERS, false, true)]
#[case::missing_catalog(ARG_CATALOG, true, false)]
fn validate_sources_reports_missing_files(
    #[case] expected_field: &'static str,
    #[case] write_answers: bool,
    #[case] write_catalog: bool,
) {
    let workspace = Workspace::new();
    let answers_path = workspace.path("answers.json");
    let catalog_path = workspace.path("catalog.json");
    if write_answers {
        write_utf8(&answers_path, b"{}");
    }
    if write_catalog {
        write_utf8(&catalog_path, b"[]");
    }

    let config = EvaluateConfig {
        answers_path,
        catalog: Some(catalog_path),
        compact: false,
    };

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    let answers_path = workspace.path("answers.json");
    std::fs::create_dir(&answers_path).expect("answers directory");

    let config = EvaluateConfig {
        answers_path: answers_path.clone(),
        catalog: None,
        compact: false,
    };

    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_EVALUATE_ANSWERS);
            assert_eq!(path, answers_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_answers_decodes_json() {
    let workspace = Workspace::new();
    let answers = wheelchair_hospital_answers().with_answer(keys::DISTANCE, 12.5);
    let path = workspace.write_answers("answers.json", &answers);

    let decoded = load_answers(&path).expect("answers should decode");
    assert_eq!(decoded, answers);
}

#[rstest]
fn load_answers_rejects_invalid_json() {
    let workspace = Workspace::new();
    let path = workspace.path("answers.json");
    write_utf8(&path, b"{ not valid json");

    let err = load_answers(&path).expect_err("invalid json should error");
    match err {
        CliError::ParseAnswers { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_answers_rejects_non_object_json() {
    let workspace = Workspace::new();
    let path = workspace.path("answers.json");
    write_utf8(&path, b"[\"wheelchair\"]");

    let err = load_answers(&path).expect_err("an array is not an answer set");
    assert!(matches!(err, CliError::ParseAnswers { .. }), "found {err:?}");
}

#[rstest]
fn load_answers_io_error_returns_open_error() {
    let workspace = Workspace::new();
    let path = workspace.path("answers.json");

    let err = load_answers(&path).expect_err("missing answers should error");
    match err {
        CliError::OpenAnswers { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenAnswers, found {other:?}"),
    }
}

#[rstest]
fn evaluate_prints_the_builtin_recommendation() {
    let workspace = Workspace::new();
    let answers_path = workspace.write_answers("answers.json", &wheelchair_hospital_answers());

    let output = run_to_json(EvaluateArgs {
        answers_path: Some(answers_path),
        ..EvaluateArgs::default()
    });

    assert_eq!(output["service"]["tier"], "self_pay");
    assert_eq!(output["distance"]["km"], 5.0);
    assert_eq!(output["distance"]["source"], "estimated");
    assert_eq!(output["quotes"][0]["vehicle"]["id"], "wheelchair-light-vehicle");
    assert_eq!(output["quotes"][0]["cost"], 3250);
    assert_eq!(output["documents"][0], "identity_document");
}

#[rstest]
fn evaluate_uses_the_supplied_catalog() {
    let workspace = Workspace::new();
    let answers_path = workspace.write_answers("answers.json", &wheelchair_hospital_answers());
    let catalog_path = workspace.write_van_catalog("catalog.json");

    let output = run_to_json(EvaluateArgs {
        answers_path: Some(answers_path),
        catalog: Some(catalog_path),
        compact: false,
    });

    let quotes = output["quotes"].as_array().expect("quotes array");
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0]["vehicle"]["id"], "city-van");
    assert_eq!(quotes[0]["cost"], 2500);
}

#[rstest]
#[case::pretty(false, 2)]
#[case::compact(true, 1)]
fn evaluate_output_is_newline_terminated(#[case] compact: bool, #[case] min_lines: usize) {
    let workspace = Workspace::new();
    let answers_path = workspace.write_answers("answers.json", &wheelchair_hospital_answers());
    let mut buffer = Vec::new();

    run_evaluate_with(
        EvaluateArgs {
            answers_path: Some(answers_path),
            catalog: None,
            compact,
        },
        &mut buffer,
    )
    .expect("evaluation should succeed");

    let text = String::from_utf8(buffer).expect("utf-8 output");
    assert!(text.ends_with('\n'));
    let lines = text.lines().count();
    if compact {
        assert_eq!(lines, min_lines);
    } else {
        assert!(lines > min_lines, "pretty output spans {lines} lines");
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "answers_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let workspace = Workspace::new();
    let env_answers = workspace.path("from-env-answers.json");
    let cli_catalog = workspace.path("from-cli-catalog.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "answers_path": workspace.path("from-file-answers.json").as_str(),
            "catalog": workspace.path("from-file-catalog.json").as_str(),
            "compact": true,
        }),
        None,
    );
    composer.push_environment(json!({
        "answers_path": env_answers.as_str(),
    }));
    composer.push_cli(cli_layer(&EvaluateArgs {
        catalog: Some(cli_catalog.clone()),
        ..EvaluateArgs::default()
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.answers_path, env_answers);
    assert_eq!(config.catalog, Some(cli_catalog));
    assert!(config.compact, "an absent --compact flag must not mask lower layers");
}

#[rstest]
fn compact_flag_overrides_lower_layers() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let workspace = Workspace::new();
    let mut composer = MergeComposer::new();
    composer.push_environment(json!({
        "answers_path": workspace.path("answers.json").as_str(),
        "compact": false,
    }));
    composer.push_cli(cli_layer(&EvaluateArgs {
        compact: true,
        ..EvaluateArgs::default()
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert!(config.compact);
}

#[rstest]
fn unset_compact_flag_is_not_serialised() {
    use serde_json::json;

    let layer = cli_layer(&EvaluateArgs::default());
    assert_eq!(layer, json!({}));
}

#[rstest]
fn subcommand_names_select_the_configuration_namespace() {
    use crate::catalog::CatalogArgs;

    assert_eq!(EvaluateArgs::command().get_name(), "evaluate");
    assert_eq!(CatalogArgs::command().get_name(), "catalog");
    assert!(ENV_EVALUATE_ANSWERS.starts_with("CAREFARE_CMDS_EVALUATE_"));
}
