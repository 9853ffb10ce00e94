use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("colors.roster"),
        r#"
# primary colors
enum Color {
    Red = "r",
    Green = "g",
    Blue = "b",
}

enum Empty {}
"#,
    )
    .unwrap();
    temp_dir
}

#[test]
fn test_cli_show_table() {
    let temp_dir = workspace();

    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("show").arg("Color").arg("--dir").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("enum Color"))
        .stdout(predicate::str::contains("Red"))
        .stdout(predicate::str::contains("\"g\""))
        .stdout(predicate::str::contains("text"));
}

#[test]
fn test_cli_show_json_keeps_declaration_order() {
    let temp_dir = workspace();

    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("show")
        .arg("Color")
        .arg("-d")
        .arg(temp_dir.path())
        .arg("--json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(parsed["enumeration"], "Color");
    let names: Vec<&str> = parsed["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Red", "Green", "Blue"]);
}

#[test]
fn test_cli_show_empty_enumeration() {
    let temp_dir = workspace();

    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("show").arg("Empty").arg("--dir").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(no members)"));
}

#[test]
fn test_cli_show_unknown_enumeration() {
    let temp_dir = workspace();

    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("show").arg("Shape").arg("--dir").arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown enumeration 'Shape'"));
}
