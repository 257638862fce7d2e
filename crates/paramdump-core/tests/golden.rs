use std::fs;
use std::path::Path;

use paramdump_core::{ParametersDocument, decode_params_file};

fn run_golden(dir: &str) {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let input = root.join(dir).join("input.params");
    let expected_path = root.join(dir).join("expected_document.json");

    let expected_json = fs::read_to_string(&expected_path).expect("read expected_document.json");
    let expected: ParametersDocument =
        serde_json::from_str(&expected_json).expect("parse expected document");

    let actual = decode_params_file(&input).expect("decode params file");

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_basic() {
    run_golden("tests/golden/basic");
}

#[test]
fn golden_empty() {
    run_golden("tests/golden/empty");
}

#[test]
fn golden_mixed() {
    run_golden("tests/golden/mixed");
}
