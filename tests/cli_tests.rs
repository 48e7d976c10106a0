//! Integration tests for the `wifireset` binary against a temporary preference file

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;
use wifireset::{DefaultResolver, FileStore, Settings, Timestamp};

/// Get a Command for the wifireset binary pointed at `prefs`.
fn wifireset(prefs: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wifireset"));
    cmd.env_remove("WIFIRESET_PREFS_FILE")
        .env_remove("RUST_LOG")
        .arg("--prefs")
        .arg(prefs);
    cmd
}

fn prefs_in(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("preferences.toml")
}

#[test]
fn test_show_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_in(&dir);

    wifireset(&prefs)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("active          on"))
        .stdout(predicate::str::contains("autostart       on"))
        .stdout(predicate::str::contains("interval        300s"))
        .stdout(predicate::str::contains("nextResetTime   (not scheduled)"));

    // show reads the last clean date, which records it
    assert!(prefs.exists());
}

#[test]
fn test_show_reflects_edits() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_in(&dir);

    wifireset(&prefs).arg("disable").assert().success();
    wifireset(&prefs)
        .args(["notify", "off"])
        .assert()
        .success();
    wifireset(&prefs)
        .args(["interval", "60"])
        .assert()
        .success();

    wifireset(&prefs)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("active          off"))
        .stdout(predicate::str::contains("notify          off"))
        .stdout(predicate::str::contains("interval        60s"));
}

#[test]
fn test_schedule_reset_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_in(&dir);

    wifireset(&prefs)
        .args(["schedule-reset", "1700000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "nextResetTime   2023-11-14T22:13:20+00:00",
        ));

    wifireset(&prefs)
        .args(["schedule-reset", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nextResetTime   (not scheduled)"));

    wifireset(&prefs)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("nextResetTime   (not scheduled)"));
}

#[test]
fn test_interval_out_of_range_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_in(&dir);

    wifireset(&prefs)
        .args(["interval", "3000000000"])
        .assert()
        .failure();
    wifireset(&prefs)
        .args(["interval", "-5"])
        .assert()
        .failure();

    // Nothing was written, so show still succeeds
    wifireset(&prefs)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("interval        300s"));
}

#[test]
fn test_interval_max_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_in(&dir);

    wifireset(&prefs)
        .args(["interval", "2147483647"])
        .assert()
        .success();
    wifireset(&prefs)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("interval        2147483647s"));
}

#[test]
fn test_mark_cleaned_at_zero_prints_stored_value() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_in(&dir);

    let output = wifireset(&prefs)
        .args(["mark-cleaned", "--at", "0"])
        .output()
        .expect("Failed to run wifireset mark-cleaned");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("1970-01-01"), "unexpected output: {}", stdout);

    let store = FileStore::open(&prefs).unwrap();
    let stored = Settings::new(&store, &DefaultResolver).last_clean_date();
    assert!(stdout.contains(&stored.to_string()));
}

#[test]
fn test_mark_cleaned_at_explicit_time() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_in(&dir);

    wifireset(&prefs)
        .args(["mark-cleaned", "--at", "1700000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "lastCleanDate   2023-11-14T22:13:20+00:00",
        ));

    let store = FileStore::open(&prefs).unwrap();
    assert_eq!(
        Settings::new(&store, &DefaultResolver).last_clean_date(),
        Timestamp::from_millis(1_700_000_000_000)
    );
}

#[test]
fn test_invalid_prefs_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_in(&dir);
    std::fs::write(&prefs, "active = = true").unwrap();

    wifireset(&prefs)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open preferences"));
}
