//! Tests for the `docprops` binary.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn docprops(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("docprops").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("DOCPROPS_CODEC")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_analyze_json_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("tabs.c"),
        "int f() {\r\n\tif (x) {\r\n\t\tgo();\r\n\t}\r\n}\r\n",
    )
    .unwrap();

    let output = docprops(&temp_dir)
        .args(["analyze", "tabs.c", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entry = &json[0];
    assert_eq!(entry["path"], "tabs.c");
    assert_eq!(entry["readable"], true);
    assert_eq!(entry["indent"], "tabs");
    assert_eq!(entry["eol"], "dos");
    assert!(entry.get("evidence").is_none());
}

#[test]
fn test_analyze_explain_includes_evidence() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.py"), "def f():\n    go()\n").unwrap();

    let output = docprops(&temp_dir)
        .args(["analyze", "a.py", "--format", "json", "--explain"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let evidence = &json[0]["evidence"];
    assert_eq!(evidence["processed_lines"], 2);
    assert_eq!(evidence["eols"]["unix"], 2);
}

#[test]
fn test_analyze_uses_config_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".docprops.toml"),
        "[defaults]\nindent = \"tabs\"\ntab_width = 8\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("flat.txt"), "no indentation\n").unwrap();

    let output = docprops(&temp_dir)
        .args(["analyze", "flat.txt", "--format", "json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["indent"], "tabs");
    assert_eq!(json[0]["tab_width"], 8);

    // flags override the config file
    let output = docprops(&temp_dir)
        .args(["analyze", "flat.txt", "--format", "json", "--default-indent", "mixed"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["indent"], "mixed");
}

#[test]
fn test_convert_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.py"), "if x:\n\tfoo\n\tbar\n").unwrap();

    docprops(&temp_dir)
        .args(["convert", "a.py", "--indent", "spaces", "--tab-width", "4"])
        .assert()
        .success()
        .stdout("if x:\n    foo\n    bar\n");
}

#[test]
fn test_convert_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a.txt");
    fs::write(&path, "one\ntwo\n").unwrap();

    docprops(&temp_dir)
        .args(["convert", "a.txt", "--eol", "dos", "--in-place"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), "one\r\ntwo\r\n");
}

#[test]
fn test_convert_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    docprops(&temp_dir)
        .args(["convert", "missing.txt", "--eol", "dos"])
        .assert()
        .failure();
}

#[test]
fn test_init_writes_config_once() {
    let temp_dir = TempDir::new().unwrap();

    docprops(&temp_dir).arg("init").assert().success();
    assert!(temp_dir.path().join(".docprops.toml").exists());

    docprops(&temp_dir).arg("init").assert().failure();
    docprops(&temp_dir).args(["init", "--force"]).assert().success();
}
