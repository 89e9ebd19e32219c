use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn ovfdeploy() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ovfdeploy"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_resolve_inline_payload_prints_options() {
    let output = ovfdeploy()
        .args([
            "resolve",
            "--compact",
            "--options.json",
            r#"{"Deployment":"cluster","PowerOn":true}"#,
        ])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["Deployment"], "cluster");
    assert_eq!(value["PowerOn"], true);
    assert_eq!(value["Name"], serde_json::Value::Null);
    assert!(value.get("NetworkMapping").is_none());
}

#[test]
fn test_resolve_file_payload_prints_options() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deploy.json");
    fs::write(
        &path,
        r#"{
  "NetworkMapping": [
    {"Name": "VM Network", "Network": "prod-vlan-10"}
  ],
  "Annotation": "web tier"
}"#,
    )
    .unwrap();

    let output = ovfdeploy()
        .arg("resolve")
        .arg("--options")
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["NetworkMapping"],
        serde_json::json!([{"Name": "VM Network", "Network": "prod-vlan-10"}])
    );
    assert_eq!(value["Annotation"], "web tier");
}

#[test]
fn test_resolve_without_sources_prints_zero_value() {
    let output = ovfdeploy().args(["resolve", "--compact"]).output().unwrap();

    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["Deployment"], "");
    assert_eq!(value["PowerOn"], false);
}

#[test]
fn test_resolve_conflicting_sources_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deploy.json");

    let output = ovfdeploy()
        .arg("resolve")
        .arg("--options")
        .arg(&path)
        .args(["--options.json", "{}"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("only one options spec could be specified"),
        "expected conflict error; got:\n{}",
        stderr
    );
}

#[test]
fn test_resolve_missing_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let output = ovfdeploy()
        .arg("resolve")
        .arg("--options")
        .arg(&path)
        .output()
        .unwrap();

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("missing.json"),
        "expected the path in the error; got:\n{}",
        stderr
    );
}

#[test]
fn test_resolve_wrong_type_fails() {
    let output = ovfdeploy()
        .args(["resolve", "--options.json", r#"{"PowerOn":"yes"}"#])
        .output()
        .unwrap();

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid type"),
        "expected a decode error; got:\n{}",
        stderr
    );
}
