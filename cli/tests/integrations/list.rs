use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_list_shows_every_enumeration() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("animals.roster"),
        r#"
enum Animal {
    Horse = 0,
    Dog = 1,
}
"#,
    )
    .unwrap();
    fs::create_dir(temp_dir.path().join("nested")).unwrap();
    fs::write(
        temp_dir.path().join("nested").join("colors.roster"),
        r#"enum Color { Red = "r", Green = "g", Blue = "b" }"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "enum Ignored { A = 1 }").unwrap();

    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 2 enumeration(s) in 2 file(s)"))
        .stdout(predicate::str::contains("Animal"))
        .stdout(predicate::str::contains("Color"))
        .stdout(predicate::str::contains("Ignored").not());
}

#[test]
fn test_cli_list_empty_workspace() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 0 enumeration(s) in 0 file(s)"));
}

#[test]
fn test_cli_list_reports_parse_errors() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("broken.roster"),
        "enum Broken {\n    A = ,\n}\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"))
        .stderr(predicate::str::contains("broken.roster"));
}

#[test]
fn test_cli_list_rejects_duplicate_enumerations_across_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.roster"), "enum Animal { Horse = 0 }").unwrap();
    fs::write(temp_dir.path().join("b.roster"), "enum Animal { Dog = 1 }").unwrap();

    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Declaration error"))
        .stderr(predicate::str::contains("Enumeration 'Animal' is already declared"));
}
