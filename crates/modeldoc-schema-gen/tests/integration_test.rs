use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn schema_gen() -> Command {
    Command::new(cargo::cargo_bin!("modeldoc-schema-gen"))
}

#[test]
fn test_main_with_custom_output() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("custom_schemas");

    schema_gen()
        .arg("-o")
        .arg(out_dir.as_os_str())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote schemas:"))
        .stdout(predicate::str::contains("config.schema.json"));

    assert!(out_dir.join("model.schema.json").exists());
    assert!(out_dir.join("config.schema.json").exists());
}

#[test]
fn test_main_creates_nested_directory() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("new_dir").join("schemas");

    assert!(!out_dir.exists());

    schema_gen()
        .arg("--out")
        .arg(out_dir.as_os_str())
        .assert()
        .success();

    assert!(out_dir.join("model.schema.json").exists());
}

#[test]
fn test_main_defaults_to_schemas_dir() {
    let temp_dir = TempDir::new().unwrap();

    schema_gen()
        .current_dir(temp_dir.path())
        .assert()
        .success();

    assert!(temp_dir.path().join("schemas").join("model.schema.json").exists());
}

#[test]
fn test_main_with_help_flag() {
    schema_gen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("modeldoc"));
}
