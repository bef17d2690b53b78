//! Running with no arguments converts the three fixed datasets

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_wingconv(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wingconv"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run wingconv")
}

fn write_datasets(dir: &Path) {
    fs::write(
        dir.join("wingspan-20221201-Birds.csv"),
        b"Common name,Wingspan\nAcorn Woodpecker,46\nBewick\x92s Wren,18\n",
    )
    .unwrap();
    fs::write(
        dir.join("wingspan-20221201-Bonus.csv"),
        "Name,VP\nAnatomist,2\n",
    )
    .unwrap();
    fs::write(
        dir.join("wingspan-20221201-Goals.csv"),
        "Name,Round\n\"[egg] in [bowl] nest\",1\n",
    )
    .unwrap();
}

fn echo_blocks(stdout: &[u8]) -> usize {
    String::from_utf8_lossy(stdout)
        .split("\n\n")
        .filter(|b| !b.trim().is_empty())
        .count()
}

#[test]
fn test_all_datasets_converted_with_echo() {
    let dir = tempdir().unwrap();
    write_datasets(dir.path());

    let output = run_wingconv(dir.path(), &[]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    for name in [
        "wingspan-birds-data.json",
        "wingspan-bonus-data.json",
        "wingspan-goals-data.json",
    ] {
        assert!(dir.path().join(name).exists(), "{} missing", name);
    }

    let birds: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("wingspan-birds-data.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(birds[1]["Common name"], "Bewick\u{2019}s Wren");

    // 2 birds + 1 bonus + 1 goal
    assert_eq!(echo_blocks(&output.stdout), 4);
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("{\n  \"Common name\": \"Acorn Woodpecker\""));
}

#[test]
fn test_first_failure_stops_the_run() {
    let dir = tempdir().unwrap();
    write_datasets(dir.path());
    fs::remove_file(dir.path().join("wingspan-20221201-Birds.csv")).unwrap();

    let output = run_wingconv(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("wingspan-20221201-Birds.csv"));
    assert!(!dir.path().join("wingspan-bonus-data.json").exists());
    assert!(!dir.path().join("wingspan-goals-data.json").exists());
}

#[test]
fn test_continue_on_error_converts_the_rest() {
    let dir = tempdir().unwrap();
    write_datasets(dir.path());
    fs::remove_file(dir.path().join("wingspan-20221201-Birds.csv")).unwrap();

    let output = run_wingconv(dir.path(), &["--continue-on-error"]);

    assert!(!output.status.success());
    assert!(dir.path().join("wingspan-bonus-data.json").exists());
    assert!(dir.path().join("wingspan-goals-data.json").exists());
}

#[test]
fn test_data_dir_and_dataset_selection() {
    let work = tempdir().unwrap();
    let data = tempdir().unwrap();
    write_datasets(data.path());

    let output = run_wingconv(
        work.path(),
        &[
            "--data-dir",
            data.path().to_str().unwrap(),
            "--dataset",
            "goals",
            "--quiet",
        ],
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(data.path().join("wingspan-goals-data.json").exists());
    assert!(!data.path().join("wingspan-birds-data.json").exists());
}
