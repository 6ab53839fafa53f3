#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Instant every test runs at unless it overrides HATDAILY_NOW
pub const NOW: &str = "2024-06-15T10:00:00";

pub fn hatdaily_cmd() -> Command {
    let mut cmd = Command::cargo_bin("hatdaily").unwrap();
    cmd.env_remove("HATDAILY_ROOT");
    cmd.env_remove("HATDAILY_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd.env("HATDAILY_NOW", NOW);
    cmd
}

/// A fresh vault with the journal folder set to `Daily`
pub fn init_vault() -> TempDir {
    let temp = TempDir::new().unwrap();
    hatdaily_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--folder")
        .arg("Daily")
        .assert()
        .success();
    temp
}

pub fn write_note(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}
