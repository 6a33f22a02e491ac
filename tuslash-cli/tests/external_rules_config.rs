//! Integration tests for external rules files

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Dialect rules without vowel harmony
const FLAT_RULES: &str = r#"
[metadata]
code = "uz-flat"
name = "Flat dialect"

[stems]
vowel_endings = ["a", "e", "i"]
liquid_endings = ["r", "l"]
vowel_link = "y"
consonant_link = "a"

[harmony]
front_codas = ["il", "el"]

[formal.vowel_final]
persons = [
    { stem = "extended", suffix = "man" },
    { stem = "extended", suffix = "san" },
    { stem = "extended", suffix = "di" },
    { stem = "extended", suffix = "miz" },
    { stem = "extended", suffix = "sizlar" },
]
third_plural = { stem = "plain", suffix = "shadi" }

[formal.consonant_final]
persons = [
    { stem = "extended", suffix = "man" },
    { stem = "extended", suffix = "san" },
    { stem = "extended", suffix = "di" },
    { stem = "extended", suffix = "miz" },
    { stem = "extended", suffix = "sizlar" },
]
third_plural = { stem = "plain", suffix = "ishadi" }

[dialectal.vowel_final]
persons = [
    { stem = "extended", suffix = "m" },
    { stem = "extended", suffix = "sn" },
    { stem = "extended", suffix = "di" },
    { stem = "extended", suffix = "mz" },
    { stem = "extended", suffix = "sler" },
]
third_plural = { stem = "plain", suffix = "shadi" }

[dialectal.consonant_final]
persons = [
    { stem = "plain", suffix = "am" },
    { stem = "plain", suffix = "asn" },
    { stem = "plain", suffix = "adi" },
    { stem = "plain", suffix = "amz" },
    { stem = "plain", suffix = "aslar" },
]
third_plural = { stem = "plain", suffix = "ishadi" }
"#;

fn write_rules(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("rules.toml");
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

#[test]
fn test_validate_valid_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules = write_rules(&temp_dir, FLAT_RULES);

    let mut cmd = Command::cargo_bin("tuslash").unwrap();
    cmd.args(["validate", "--rules", &rules])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rules are valid"))
        .stdout(predicate::str::contains("Code: uz-flat"))
        .stdout(predicate::str::contains("Front codas: il, el"))
        .stdout(predicate::str::contains("sheva: vowel harmony off"));
}

#[test]
fn test_validate_invalid_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules = write_rules(&temp_dir, &FLAT_RULES.replace("{ stem = \"extended\", suffix = \"sler\" },\n", ""));

    let mut cmd = Command::cargo_bin("tuslash").unwrap();
    cmd.args(["validate", "--rules", &rules])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Rules are invalid"))
        .stdout(predicate::str::contains("exactly 5"));
}

#[test]
fn test_validate_harmony_placeholder_without_harmony() {
    let temp_dir = TempDir::new().unwrap();
    let rules = write_rules(
        &temp_dir,
        &FLAT_RULES.replace("suffix = \"amz\"", "suffix = \"{v}mz\""),
    );

    let mut cmd = Command::cargo_bin("tuslash").unwrap();
    cmd.args(["validate", "--rules", &rules])
        .assert()
        .failure()
        .stdout(predicate::str::contains("harmony is disabled"));
}

#[test]
fn test_process_with_external_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules = write_rules(&temp_dir, FLAT_RULES);
    let input_path = temp_dir.path().join("fellar.csv");
    fs::write(&input_path, "rasmiy,sheva\nkel,kel\n").unwrap();

    let mut cmd = Command::cargo_bin("tuslash").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(&input_path)
        .arg("--rules")
        .arg(&rules)
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "kel,kel,kelaman,kelasan,keladi,kelamiz,kelasizlar,kelishadi,kelam,kelasn,keladi,kelamz,kelaslar,kelishadi",
        ));
}

#[test]
fn test_process_with_rules_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let rules = write_rules(&temp_dir, FLAT_RULES);
    let config_path = temp_dir.path().join("tuslash.toml");
    fs::write(
        &config_path,
        format!("[processing]\nrules_file = {:?}\n", rules),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("tuslash").unwrap();
    cmd.args(["process", "-i", "tests/fixtures/fellar.csv", "-q", "-c"])
        .arg(&config_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("kelaslar"))
        .stdout(predicate::str::contains("kelesler").not());
}

#[test]
fn test_process_with_missing_rules_file() {
    let mut cmd = Command::cargo_bin("tuslash").unwrap();
    cmd.args([
        "process",
        "-i",
        "tests/fixtures/fellar.csv",
        "--rules",
        "/nonexistent/rules.toml",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_generate_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("generated.toml");

    let mut cmd = Command::cargo_bin("tuslash").unwrap();
    cmd.args(["generate-config", "-l", "uz-custom", "-o"])
        .arg(&rules_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    let mut cmd = Command::cargo_bin("tuslash").unwrap();
    cmd.arg("validate")
        .arg("--rules")
        .arg(&rules_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Code: uz-custom"))
        .stdout(predicate::str::contains("sheva: vowel harmony on"));

    let mut cmd = Command::cargo_bin("tuslash").unwrap();
    cmd.args(["conjugate", "bil", "--rules"])
        .arg(&rules_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("bilishedi"));
}
