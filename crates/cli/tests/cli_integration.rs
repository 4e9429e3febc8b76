//! CLI integration tests for all subcommands.
//!
//! Uses `assert_cmd` to spawn the `jsonbind` binary and verify
//! exit codes, stdout content, and stderr content.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper: create a Command for the `jsonbind` binary.
fn jsonbind() -> Command {
    cargo_bin_cmd!("jsonbind")
}

/// Write `contents` to `name` inside a fresh temp dir.
fn write_input(name: &str, contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write input");
    (dir, path)
}

// ──────────────────────────────────────────────
// 1. Help, version, listing
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    jsonbind()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON schema bindings"));
}

#[test]
fn version_exits_0() {
    jsonbind()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jsonbind"));
}

#[test]
fn types_lists_types_and_functions() {
    jsonbind()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("arrays.RefArrayType"))
        .stdout(predicate::str::contains("arrays.integerArray (params)"))
        .stdout(predicate::str::contains("arrays.returnRefArray (result)"));
}

#[test]
fn types_json_output_is_valid_json() {
    let out = jsonbind()
        .args(["--output", "json", "types"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
    assert!(v["types"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("enums.EnumType")));
    assert!(!v["functions"].as_array().unwrap().is_empty());
}

// ──────────────────────────────────────────────
// 2. Populate
// ──────────────────────────────────────────────

#[test]
fn populate_from_file_round_trips() {
    let (_dir, path) = write_input("refs.json", r#"{"refs": [{"val": 1}, {"val": 2}]}"#);
    let out = jsonbind()
        .args(["populate", "arrays.RefArrayType"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v, serde_json::json!({"refs": [{"val": 1}, {"val": 2}]}));
}

#[test]
fn populate_from_stdin() {
    jsonbind()
        .args(["populate", "enums.EnumType"])
        .write_stdin(r#"{"type": "two"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"two\""));
}

#[test]
fn populate_rejects_bad_element_with_path() {
    jsonbind()
        .args(["populate", "arrays.RefArrayType"])
        .write_stdin(r#"{"refs": [{"val": 1}, 3]}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "$.refs[1]: expected dictionary, found integer",
        ));
}

#[test]
fn populate_json_error_output() {
    let out = jsonbind()
        .args(["--output", "json", "populate", "arrays.Item"])
        .write_stdin("{}")
        .assert()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON error");
    assert_eq!(v["kind"], "absent");
    assert_eq!(v["path"], "$");
}

#[test]
fn populate_unknown_type_exits_2() {
    jsonbind()
        .args(["populate", "arrays.Nope"])
        .write_stdin("{}")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown type 'arrays.Nope'"));
}

#[test]
fn populate_invalid_json_exits_1() {
    jsonbind()
        .args(["populate", "arrays.Item"])
        .write_stdin("{not json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error parsing JSON"));
}

#[test]
fn populate_missing_file_exits_1() {
    jsonbind()
        .args(["populate", "arrays.Item", "/nonexistent/input.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error reading file"));
}

#[test]
fn quiet_suppresses_error_output() {
    jsonbind()
        .args(["--quiet", "populate", "arrays.Item"])
        .write_stdin("[]")
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

// ──────────────────────────────────────────────
// 3. Params and results
// ──────────────────────────────────────────────

#[test]
fn params_decodes_argument_list() {
    jsonbind()
        .args(["params", "arrays.integerArray"])
        .write_stdin("[[2, 4, 8]]")
        .assert()
        .success()
        .stdout(predicate::str::contains("nums"));
}

#[test]
fn params_json_output_carries_arguments_and_description() {
    let out = jsonbind()
        .args(["--output", "json", "params", "arrays.integerArray"])
        .write_stdin("[[2, 4, 8]]")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
    assert_eq!(v["function"], "arrays.integerArray");
    assert_eq!(v["arguments"], serde_json::json!([[2, 4, 8]]));
    assert!(v["description"].as_str().unwrap().contains("nums"));
}

#[test]
fn params_rejects_too_many_arguments() {
    jsonbind()
        .args(["params", "arrays.integerArray"])
        .write_stdin("[[2], [4]]")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected at most 1 arguments"));
}

#[test]
fn params_rejects_non_list_argument_list() {
    jsonbind()
        .args(["params", "enums.takesEnum"])
        .write_stdin(r#"{"state": "foo"}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected list, found dictionary"));
}

#[test]
fn params_for_result_only_function_exits_2() {
    jsonbind()
        .args(["params", "arrays.returnIntegerArray"])
        .write_stdin("[]")
        .assert()
        .code(2);
}

#[test]
fn result_encodes_return_value() {
    let out = jsonbind()
        .args(["result", "arrays.returnRefArray"])
        .write_stdin(r#"[{"val": 1}, {"val": 2}]"#)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v, serde_json::json!([{"val": 1}, {"val": 2}]));
}

#[test]
fn result_rejects_wrong_type() {
    jsonbind()
        .args(["result", "arrays.returnIntegerArray"])
        .write_stdin("[1, 2.5]")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("$[1]: expected integer, found double"));
}
