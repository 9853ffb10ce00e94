use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("animals.roster"),
        r#"
enum Animal {
    Horse = 0,
    Dog = 1,
    Cat = -3,
    Fox = 1,
}

enum Flag {
    Zero = "0",
    On = true,
}
"#,
    )
    .unwrap();
    temp_dir
}

fn roster(temp_dir: &TempDir, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.args(args).arg("--dir").arg(temp_dir.path());
    cmd
}

#[test]
fn test_cli_value_of() {
    let temp_dir = workspace();

    roster(&temp_dir, &["value-of", "Animal", "Dog"])
        .assert()
        .success()
        .stdout("1\n");

    roster(&temp_dir, &["value-of", "Flag", "Zero"])
        .assert()
        .success()
        .stdout("\"0\"\n");
}

#[test]
fn test_cli_value_of_undefined_member() {
    let temp_dir = workspace();

    roster(&temp_dir, &["value-of", "Animal", "Whale"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "member 'Whale' is not defined in enumeration Animal",
        ));
}

#[test]
fn test_cli_value_of_json() {
    let temp_dir = workspace();

    let output = roster(&temp_dir, &["value-of", "Animal", "Horse", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(parsed["enumeration"], "Animal");
    assert_eq!(parsed["member"], "Horse");
    assert_eq!(parsed["value"]["kind"], "integer");
    assert_eq!(parsed["value"]["value"], 0);
}

#[test]
fn test_cli_name_of_returns_first_declared_match() {
    let temp_dir = workspace();

    roster(&temp_dir, &["name-of", "Animal", "1"])
        .assert()
        .success()
        .stdout("Dog\n");

    roster(&temp_dir, &["name-of", "Animal", "-3"])
        .assert()
        .success()
        .stdout("Cat\n");
}

#[test]
fn test_cli_name_of_is_type_strict() {
    let temp_dir = workspace();

    roster(&temp_dir, &["name-of", "Flag", "\"0\""])
        .assert()
        .success()
        .stdout("Zero\n");

    roster(&temp_dir, &["name-of", "Flag", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not defined in enumeration Flag"));

    roster(&temp_dir, &["name-of", "Animal", "\"1\""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not defined in enumeration Animal"));
}

#[test]
fn test_cli_name_of_rejects_malformed_literal() {
    let temp_dir = workspace();

    roster(&temp_dir, &["name-of", "Animal", "one"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_cli_defined() {
    let temp_dir = workspace();

    roster(&temp_dir, &["defined", "Animal", "Horse"])
        .assert()
        .success()
        .stdout("true\n");

    roster(&temp_dir, &["defined", "Animal", "Whale"])
        .assert()
        .success()
        .stdout("false\n");

    roster(&temp_dir, &["defined", "Animal", ""])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_cli_get_member_call() {
    let temp_dir = workspace();

    roster(&temp_dir, &["get", "Animal.Horse()"])
        .assert()
        .success()
        .stdout("Animal.Horse = 0\n");

    roster(&temp_dir, &["get", "Flag::On"])
        .assert()
        .success()
        .stdout("Flag.On = true\n");
}

#[test]
fn test_cli_get_undefined_member() {
    let temp_dir = workspace();

    roster(&temp_dir, &["get", "Animal.Whale()"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "member 'Whale' is not defined in enumeration Animal",
        ));
}

#[test]
fn test_cli_get_malformed_call() {
    let temp_dir = workspace();

    roster(&temp_dir, &["get", "Animal."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}
