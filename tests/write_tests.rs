//! Integration tests for write, list and theme commands

#![allow(deprecated)]

use moodjour::domain::JournalEntry;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::moodjour_cmd;

fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    moodjour_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

fn stored_history(root: &Path) -> Vec<JournalEntry> {
    match fs::read_to_string(root.join(".moodjour/store/journal-history")) {
        Ok(raw) => serde_json::from_str(&raw).unwrap(),
        Err(_) => Vec::new(),
    }
}

#[test]
fn test_write_detects_mood() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["write", "I", "feel", "happy", "today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry saved!"))
        .stdout(predicate::str::contains("Mood: 😊 happy"))
        .stdout(predicate::str::contains("You reflected on emotion."));

    let history = stored_history(temp.path());
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].mood, "😊");
    assert_eq!(history[0].text, "I feel happy today");
    assert!(history[0].time.ends_with('Z'));
}

#[test]
fn test_write_explicit_mood() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["write", "--mood", "confused", "xyz qqq"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood: 😕 confused"));

    assert_eq!(stored_history(temp.path())[0].mood, "😕");
}

#[test]
fn test_write_empty_rejected() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["write", "   "])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Please write something."));

    assert!(stored_history(temp.path()).is_empty());
}

#[test]
fn test_write_undetectable_mood_rejected() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["write", "xyz qqq"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Couldn't detect mood"))
        .stderr(predicate::str::contains("--mood"));

    assert!(stored_history(temp.path()).is_empty());
}

#[test]
fn test_write_unknown_mood_rejected() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["write", "--mood", "ecstatic", "so happy"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown mood: 'ecstatic'"));

    assert!(stored_history(temp.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn test_write_from_draft_with_editor() {
    let temp = init_journal();
    fs::write(temp.path().join(".moodjour/draft.txt"), "A peaceful walk\n").unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .env("EDITOR", "true")
        .arg("write")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood: 😌 calm"));

    assert!(!temp.path().join(".moodjour/draft.txt").exists());
    assert_eq!(stored_history(temp.path())[0].text, "A peaceful walk");
}

#[cfg(unix)]
#[test]
fn test_write_empty_draft_rejected() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .env("EDITOR", "true")
        .arg("write")
        .assert()
        .code(3);

    assert!(stored_history(temp.path()).is_empty());
}

#[test]
fn test_list_empty() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No entries found\n");
}

#[test]
fn test_list_newest_first() {
    let temp = init_journal();

    for text in ["first fun day", "second sad day", "third weird day"] {
        moodjour_cmd()
            .current_dir(temp.path())
            .args(["write", text])
            .assert()
            .success();
    }

    let output = moodjour_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Mood: 😕 — third weird day..."));
    assert!(lines[1].contains("Mood: 😢 — second sad day..."));
    assert!(lines[2].contains("Mood: 😊 — first fun day..."));
}

#[test]
fn test_list_limit_and_preview_length() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["write", "an older fun entry"])
        .assert()
        .success();
    moodjour_cmd()
        .current_dir(temp.path())
        .args(["write", "a newer and rather long relaxed entry"])
        .assert()
        .success();
    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "preview_length", "7"])
        .assert()
        .success();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("— a newer..."))
        .stdout(predicate::str::contains("older").not());
}

#[test]
fn test_list_survives_corrupt_history() {
    let temp = init_journal();
    let history_path = temp.path().join(".moodjour/store/journal-history");
    fs::write(&history_path, "{{ not json").unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No entries found\n");

    assert_eq!(fs::read_to_string(&history_path).unwrap(), "{{ not json");
}

#[test]
fn test_theme_toggle_persists() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("theme")
        .assert()
        .success()
        .stdout("Theme: light\n");

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout("Theme: dark\n");

    assert_eq!(
        fs::read_to_string(temp.path().join(".moodjour/store/dark-mode")).unwrap(),
        "true"
    );

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["theme", "light"])
        .assert()
        .success()
        .stdout("Theme: light\n");
}

#[test]
fn test_theme_invalid_setting() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["theme", "neon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid theme: 'neon'"));
}
