//! Integration tests for siftq CLI.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const CONFIG: &str = r#"
global_forbidden_columns = ["password"]

[models.user]
primary_column = "uuid"
forbidden_columns = ["token"]

[models.user.columns]
uuid = "string"
age = "int"
"#;

fn siftq_cmd(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_siftq"));
    cmd.env("SIFT_CONFIG", config);
    cmd.env_remove("SIFT_LOG");
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("sift.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_parse_primary_key() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, CONFIG);

    let output = siftq_cmd(&config)
        .args(["parse", "-m", "user", "id", "=100;200"])
        .output()
        .expect("failed to run siftq parse");

    assert!(output.status.success(), "siftq parse failed: {:?}", output);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["column"], "uuid");
    assert_eq!(json["operator"], "=");
    assert_eq!(json["values"], serde_json::json!(["100", "200"]));
    assert_eq!(json["type"], "string");
    assert_eq!(json["is_relation"], false);
}

#[test]
fn test_parse_relation() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, CONFIG);

    let output = siftq_cmd(&config)
        .args(["parse", "-m", "user", "user.name", ">John"])
        .output()
        .expect("failed to run siftq parse");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["type"], "generic");
    assert_eq!(json["is_relation"], true);
}

#[test]
fn test_parse_forbidden_fails() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, CONFIG);

    let output = siftq_cmd(&config)
        .args(["parse", "-m", "user", "password", "=x"])
        .output()
        .expect("failed to run siftq parse");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("forbidden"));
}

#[test]
fn test_parse_unknown_model_fails() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, CONFIG);

    let output = siftq_cmd(&config)
        .args(["parse", "-m", "post", "id", "=1"])
        .output()
        .expect("failed to run siftq parse");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown model: post"));
}

#[test]
fn test_explicit_config_flag() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, CONFIG);

    let output = siftq_cmd(&tmp.path().join("absent.toml"))
        .arg("--config")
        .arg(&config)
        .args(["parse", "-m", "user", "age", ">=18"])
        .output()
        .expect("failed to run siftq parse");

    assert!(output.status.success(), "siftq parse failed: {:?}", output);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operator"], ">=");
    assert_eq!(json["type"], "int");
}

#[test]
fn test_operators_lists_defaults() {
    let tmp = TempDir::new().unwrap();

    let output = siftq_cmd(&tmp.path().join("absent.toml"))
        .args(["operators"])
        .output()
        .expect("failed to run siftq operators");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("!<>"));
    assert!(!stdout.contains("warning"));
}

#[test]
fn test_check_rejects_shadowed_operators() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, r#"operators = ["=", ">="]"#);

    let output = siftq_cmd(&config)
        .args(["check"])
        .output()
        .expect("failed to run siftq check");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("shadows"));

    let output = siftq_cmd(&config)
        .args(["operators"])
        .output()
        .expect("failed to run siftq operators");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("warning: '=' shadows '>='"));
}

#[test]
fn test_check_ok() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, CONFIG);

    let output = siftq_cmd(&config)
        .args(["check"])
        .output()
        .expect("failed to run siftq check");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("ok: 1 models, 9 operators"));
}
