use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("paramdump"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn sample_params() -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join("basic")
        .join("input.params")
}

#[test]
fn help_supports_decode_and_dump() {
    cmd().arg("decode").arg("--help").assert().success();
    cmd().arg("dump").arg("--help").assert().success();
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.params");
    let report = temp.path().join("report.json");

    cmd()
        .arg("decode")
        .arg(missing)
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn stdout_outputs_json_report() {
    let input = sample_params();
    let assert = cmd()
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let report: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(report["report_version"], 1);
    assert_eq!(report["parameters"]["group"]["tag"], 0x20);
    assert_eq!(report["parameters"]["group"]["values"][0]["kind"], "uint8");
}

#[test]
fn report_written_to_file() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_params();
    let report = temp.path().join("report.json");

    cmd()
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stderr(contains("OK: report written"));

    let written = fs::read_to_string(&report).expect("report file");
    let _: Value = serde_json::from_str(&written).expect("valid json");
}

#[test]
fn stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_params();
    let report = temp.path().join("report.json");

    cmd()
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_and_compact_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_params();
    let report = temp.path().join("report.json");

    cmd()
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let input = sample_params();
    let report = temp.path().join("report.json");

    cmd()
        .arg("decode")
        .arg(input)
        .arg("-o")
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicates::str::contains("OK:").not());
}

#[test]
fn interpret_lists_values() {
    let input = sample_params();

    cmd()
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .arg("--interpret")
        .assert()
        .success()
        .stderr(contains("Interpreted values:").and(contains("float32")));
}

#[test]
fn invalid_file_fails_with_decode_error() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("bad.params");
    fs::write(&input, [0x00, 0x01, 0x02]).expect("write bad input");

    cmd()
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("bad magic"));
}

#[test]
fn unsupported_str_record_fails_loudly() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("str.params");
    let mut bytes = vec![0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20];
    bytes.extend_from_slice(&0u32.to_be_bytes());
    bytes.push(0x08);
    fs::write(&input, bytes).expect("write str input");

    cmd()
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("unsupported value kind str"));
}
