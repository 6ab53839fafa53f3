//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{hatdaily_cmd, init_vault};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    hatdaily_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized hatdaily"))
        .stdout(predicate::str::contains("hatdaily config daily_folder_path"));

    let config_path = temp.path().join(".hatdaily/config.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("daily_file_format = \"YYYY-MM-DD\""));
    assert!(content.contains("monthly_file_format = \"YYYY-MM\""));
    assert!(content.contains("yearly_file_format = \"YYYY\""));
    assert!(!content.contains("daily_folder_path"));
}

#[test]
fn test_init_with_folder() {
    let temp = init_vault();

    let content = fs::read_to_string(temp.path().join(".hatdaily/config.toml")).unwrap();
    assert!(content.contains("daily_folder_path = \"Daily\""));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    hatdaily_cmd().arg("init").arg(temp.path()).assert().success();
    hatdaily_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_get_folder() {
    let temp = init_vault();

    hatdaily_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("daily_folder_path")
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily"));
}

#[test]
fn test_config_set_and_get_format() {
    let temp = init_vault();

    hatdaily_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("daily_file_format")
        .arg("DD.MM.YYYY")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set daily_file_format = DD.MM.YYYY"));

    hatdaily_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("daily_file_format")
        .assert()
        .success()
        .stdout(predicate::str::contains("DD.MM.YYYY"));
}

#[test]
fn test_config_rejects_invalid_format() {
    let temp = init_vault();

    hatdaily_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("monthly_file_format")
        .arg("MM")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format 'MM'"));
}

#[test]
fn test_config_clear_template() {
    let temp = init_vault();

    hatdaily_cmd()
        .current_dir(temp.path())
        .args(["config", "daily_template_path", "Templates/Daily"])
        .assert()
        .success();
    hatdaily_cmd()
        .current_dir(temp.path())
        .args(["config", "daily_template_path", ""])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".hatdaily/config.toml")).unwrap();
    assert!(!content.contains("daily_template_path"));
}

#[test]
fn test_config_list() {
    let temp = init_vault();

    hatdaily_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("daily_folder_path = Daily"))
        .stdout(predicate::str::contains("yearly_file_format = YYYY"))
        .stdout(predicate::str::contains("editor = "));
}

#[test]
fn test_config_without_key_shows_usage() {
    let temp = init_vault();

    hatdaily_cmd()
        .current_dir(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: hatdaily config"));
}

#[test]
fn test_config_unknown_key() {
    let temp = init_vault();

    hatdaily_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("mode")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_outside_vault() {
    let temp = TempDir::new().unwrap();

    hatdaily_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not a hatdaily directory"));
}

#[test]
fn test_config_from_subdirectory() {
    let temp = init_vault();
    let nested = temp.path().join("Daily").join("2024");
    fs::create_dir_all(&nested).unwrap();

    hatdaily_cmd()
        .current_dir(&nested)
        .arg("config")
        .arg("daily_folder_path")
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily"));
}

#[test]
fn test_root_env_points_at_vault() {
    let temp = init_vault();
    let elsewhere = TempDir::new().unwrap();

    hatdaily_cmd()
        .current_dir(elsewhere.path())
        .env("HATDAILY_ROOT", temp.path())
        .arg("config")
        .arg("daily_folder_path")
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily"));
}

#[test]
fn test_no_command_prints_hint() {
    hatdaily_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("--help"));
}
