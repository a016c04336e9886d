#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Workspace {
    temp: TempDir,
    config: PathBuf,
}

impl Workspace {
    fn new(editor: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let notes = temp.path().join("notes");
        let config = temp.path().join("config.json");
        let json = serde_json::json!({
            "pwd": notes,
            "path": "Notes",
            "extension": ".txt",
            "editor": editor,
            "path_alias": "~",
        });
        fs::write(&config, json.to_string()).unwrap();
        Self { temp, config }
    }

    fn notes(&self) -> PathBuf {
        self.temp.path().join("notes")
    }

    fn syne(&self) -> Command {
        let mut cmd = Command::cargo_bin("syne").unwrap();
        cmd.env_remove("RUST_LOG")
            .arg("--config")
            .arg(&self.config);
        cmd
    }
}

#[cfg(unix)]
#[test]
fn test_creates_note_and_opens_editor() {
    let ws = Workspace::new("true");

    ws.syne()
        .args(["todo.md", "~/work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let target = ws.notes().join("Notes/work/todo.md");
    assert!(target.is_file());
    assert_eq!(fs::read_to_string(target).unwrap(), "");
}

#[cfg(unix)]
#[test]
fn test_second_run_keeps_content() {
    let ws = Workspace::new("true");
    ws.syne().arg("todo").assert().success();

    let target = ws.notes().join("Notes/todo.txt");
    fs::write(&target, "remember the milk").unwrap();

    ws.syne()
        .arg("todo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opening"));
    assert_eq!(fs::read_to_string(target).unwrap(), "remember the milk");
}

#[cfg(unix)]
#[test]
fn test_explicit_extension_with_default_path() {
    let ws = Workspace::new("true");
    ws.syne().args(["plan", ".", "md"]).assert().success();
    assert!(ws.notes().join("Notes/plan.md").is_file());
}

#[cfg(unix)]
#[test]
fn test_empty_path_uses_default_folder() {
    let ws = Workspace::new("true");
    ws.syne().args(["todo", ""]).assert().success();
    assert!(ws.notes().join("Notes/todo.txt").is_file());
}

#[test]
fn test_blacklisted_extension_fails_without_side_effects() {
    let ws = Workspace::new("true");

    ws.syne()
        .args(["setup", "x", "exe"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("extension"));

    assert!(!ws.notes().exists());
}

#[test]
fn test_invalid_filename_is_too_short() {
    let ws = Workspace::new("true");

    ws.syne()
        .arg("???")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too short as filename"));
}

#[test]
fn test_missing_editor_fails_but_keeps_placeholder() {
    let ws = Workspace::new("syne-test-no-such-editor");

    ws.syne()
        .arg("todo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch editor"));

    assert!(ws.notes().join("Notes/todo.txt").is_file());
}

#[test]
fn test_list_notes() {
    let ws = Workspace::new("true");
    fs::create_dir_all(ws.notes().join("Notes")).unwrap();
    fs::write(ws.notes().join("Notes/a.txt"), "").unwrap();
    fs::write(ws.notes().join("b.md"), "").unwrap();

    let a = Path::new("Notes").join("a.txt");
    ws.syne()
        .arg("--list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(a.to_string_lossy().as_ref())
                .and(predicate::str::contains("b.md")),
        );
}

#[test]
fn test_list_conflicts_with_filename() {
    let ws = Workspace::new("true");
    ws.syne().args(["-l", "todo"]).assert().failure();
}

#[test]
fn test_show_defaults() {
    let ws = Workspace::new("true");

    ws.syne()
        .arg("-d")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Notes")
                .and(predicate::str::contains("txt"))
                .and(predicate::str::contains("config file")),
        );
    assert!(!ws.notes().exists());
}

#[test]
fn test_no_filename_is_an_error() {
    let ws = Workspace::new("true");

    ws.syne()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid filename"));
}

#[test]
fn test_malformed_config_is_reported() {
    let ws = Workspace::new("true");
    fs::write(&ws.config, "{ nope").unwrap();

    ws.syne()
        .arg("todo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
