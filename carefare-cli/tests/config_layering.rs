//! End-to-end checks that the `carefare` binary reads its options from the
//! environment and from `.carefare.toml`, not only from flags.

use std::process::{Command, Output};

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use serde_json::Value;
use tempfile::TempDir;

const ANSWERS: &str = r#"{
  "area": "wakayama-city",
  "mobility": "wheelchair",
  "care_certification": "no",
  "purpose": "hospital",
  "pickup": "和歌山駅",
  "destination": "和歌山県立医科大学附属病院"
}"#;

const VAN_CATALOG: &str = r#"[{
  "id": "city-van",
  "name": "City van",
  "kind": "wheelchair_van",
  "base_fare": 1000,
  "fare_per_km": 300,
  "capacity": 4,
  "wheelchair_accessible": true
}]"#;

/// A scratch directory used as the working and home directory of each run.
struct Sandbox {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Sandbox {
    fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    fn carefare(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_carefare"));
        command
            .args(args)
            .current_dir(&self.root)
            .env("HOME", &self.root)
            .env("XDG_CONFIG_HOME", &self.root)
            .env_remove("RUST_LOG");
        for (key, value) in env {
            command.env(key, value);
        }
        command.output().expect("run carefare")
    }
}

#[fixture]
fn sandbox() -> Sandbox {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    Sandbox { _tmp: tmp, root }
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "carefare failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

fn first_vehicle(stdout: &str) -> Value {
    let evaluation: Value = serde_json::from_str(stdout).expect("evaluation JSON");
    evaluation["quotes"][0]["vehicle"]["id"].clone()
}

#[rstest]
fn answers_path_is_read_from_the_environment(sandbox: Sandbox) {
    let answers = sandbox.write("answers.json", ANSWERS);

    let output = sandbox.carefare(
        &["evaluate"],
        &[("CAREFARE_CMDS_EVALUATE_ANSWERS_PATH", answers.as_str())],
    );

    let stdout = stdout_of(&output);
    assert_eq!(first_vehicle(&stdout), "wheelchair-light-vehicle");
}

#[rstest]
fn missing_answers_error_names_the_environment_variable(sandbox: Sandbox) {
    let output = sandbox.carefare(&["evaluate"], &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("CAREFARE_CMDS_EVALUATE_ANSWERS_PATH"),
        "unexpected error: {stderr}"
    );
}

#[rstest]
fn evaluate_section_of_the_config_file_applies(sandbox: Sandbox) {
    let answers = sandbox.write("answers.json", ANSWERS);
    let catalog = sandbox.write("catalog.json", VAN_CATALOG);
    sandbox.write(
        ".carefare.toml",
        &format!("[cmds.evaluate]\ncatalog = \"{catalog}\"\ncompact = true\n"),
    );

    let output = sandbox.carefare(&["evaluate", answers.as_str()], &[]);

    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 1, "expected compact output");
    assert_eq!(first_vehicle(&stdout), "city-van");
}

#[rstest]
fn compact_output_can_be_enabled_from_the_environment(sandbox: Sandbox) {
    let answers = sandbox.write("answers.json", ANSWERS);

    let output = sandbox.carefare(
        &["evaluate", answers.as_str()],
        &[("CAREFARE_CMDS_EVALUATE_COMPACT", "true")],
    );

    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 1, "expected compact output");
}

#[rstest]
fn catalog_options_do_not_leak_into_evaluate(sandbox: Sandbox) {
    let answers = sandbox.write("answers.json", ANSWERS);
    let catalog = sandbox.write("catalog.json", VAN_CATALOG);
    let env = [("CAREFARE_CMDS_CATALOG_CATALOG", catalog.as_str())];

    let listed: Value =
        serde_json::from_str(&stdout_of(&sandbox.carefare(&["catalog"], &env)))
            .expect("catalog JSON");
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let evaluated = stdout_of(&sandbox.carefare(&["evaluate", answers.as_str()], &env));
    assert_eq!(first_vehicle(&evaluated), "wheelchair-light-vehicle");
}
