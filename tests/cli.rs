use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TWO: &str = "TODO:2 \"Buy milk\" {{}}\nTODO:1 \"Call mom\" {{\n  urgent\n}}\n";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(contents: Option<&str>) -> Self {
        let dir = TempDir::new().unwrap();
        if let Some(contents) = contents {
            std::fs::write(dir.path().join("TODO"), contents).unwrap();
        }
        Self { dir }
    }

    fn todo_path(&self) -> PathBuf {
        self.dir.path().join("TODO")
    }

    fn contents(&self) -> String {
        std::fs::read_to_string(self.todo_path()).unwrap()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("todo").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("TODO_FILE")
            .env_remove("TODO_LOG")
            .env("NO_COLOR", "1")
            .env("HOME", self.dir.path());
        cmd
    }
}

fn config_path(root: &Path) -> PathBuf {
    root.join(".todofile").join("config.yaml")
}

#[test]
fn test_list_is_default_command() {
    let ws = Workspace::new(Some(TWO));

    ws.cmd()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("TODOs:"))
        .stdout(predicate::str::contains("Call mom"))
        .stdout(predicate::str::contains("urgent"))
        .stdout(predicate::str::contains("Not added."));
}

#[test]
fn test_list_sorted_by_priority() {
    let ws = Workspace::new(Some(TWO));

    let output = ws.cmd().arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let call = stdout.find("Call mom").unwrap();
    let buy = stdout.find("Buy milk").unwrap();
    assert!(call < buy);
}

#[test]
fn test_list_level_filter() {
    let ws = Workspace::new(Some(TWO));

    ws.cmd()
        .args(["list", "-l", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("Call mom").not());

    ws.cmd()
        .args(["ls", "--level", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No TODOs."));
}

#[test]
fn test_list_json() {
    let ws = Workspace::new(Some(TWO));

    let output = ws.cmd().args(["-o", "json", "list"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["items"][0]["title"], "Call mom");
    assert!(value["items"][1]["description"].is_null());
}

#[test]
fn test_empty_file_lists_nothing() {
    let ws = Workspace::new(Some("\n\n"));

    ws.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No TODOs."));
}

#[test]
fn test_missing_file_fails() {
    let ws = Workspace::new(None);

    ws.cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_syntax_error_prints_caret_diagnostic() {
    let ws = Workspace::new(Some("TODO:1 \"ok\" {{}}\nTODO:0 \"bad\" {{}}\n"));

    ws.cmd()
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "2 | TODO:0 \"bad\" {{}}\n         ^\n",
        ))
        .stderr(predicate::str::contains("Error: priority is less or equal to 0."));
}

#[test]
fn test_check_ok() {
    let ws = Workspace::new(Some(TWO));

    ws.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 records OK"));
}

#[test]
fn test_add_and_remove_round_trip() {
    let ws = Workspace::new(Some(TWO));

    ws.cmd()
        .args(["add", "Walk dog", "-p", "3", "-d", r"park\nthen home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added TODO: Walk dog"));

    assert_eq!(
        ws.contents(),
        format!("{TWO}TODO:3 \"Walk dog\" {{{{\npark\nthen home\n}}}}\n")
    );

    ws.cmd()
        .args(["rm", "Walk dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed TODO: Walk dog"));

    assert_eq!(ws.contents(), TWO);
}

#[test]
fn test_remove_keeps_other_record_bytes() {
    let ws = Workspace::new(Some(TWO));

    ws.cmd().args(["remove", "Buy milk"]).assert().success();

    assert_eq!(ws.contents(), "TODO:1 \"Call mom\" {{\n  urgent\n}}\n");
}

#[test]
fn test_add_duplicate_fails() {
    let ws = Workspace::new(Some(TWO));

    ws.cmd()
        .args(["add", "Buy milk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(ws.contents(), TWO);
}

#[test]
fn test_remove_unknown_title_fails() {
    let ws = Workspace::new(Some(TWO));

    ws.cmd()
        .args(["rm", "Walk dog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_add_creates_missing_file() {
    let ws = Workspace::new(None);

    ws.cmd().args(["add", "First"]).assert().success();

    assert_eq!(ws.contents(), "TODO:1 \"First\" {{}}\n");
}

#[test]
fn test_file_flag_and_env() {
    let ws = Workspace::new(None);
    let other = ws.dir.path().join("work.todo");
    std::fs::write(&other, TWO).unwrap();

    ws.cmd()
        .args(["check", "-f"])
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 records OK"));

    ws.cmd()
        .env("TODO_FILE", &other)
        .arg("check")
        .assert()
        .success();
}

#[test]
fn test_config_sets_default_file_and_sorting() {
    let ws = Workspace::new(None);
    let path = config_path(ws.dir.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        "general:\n  file: notes.todo\nlist:\n  sort_by_priority: false\n",
    )
    .unwrap();
    std::fs::write(ws.dir.path().join("notes.todo"), TWO).unwrap();

    let output = ws.cmd().output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.find("Buy milk").unwrap() < stdout.find("Call mom").unwrap());
}

#[test]
fn test_explicit_missing_config_warns() {
    let ws = Workspace::new(Some(TWO));

    ws.cmd()
        .args(["--config", "typo.yaml", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 records OK"))
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_default_missing_config_is_quiet() {
    let ws = Workspace::new(Some(TWO));

    ws.cmd()
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_remove_ignores_lookalike_in_description() {
    let source = "TODO:1 \"Plan\" {{\nTODO: ask about \"Report\"\n}}\nTODO:2 \"Report\" {{}}\n";
    let ws = Workspace::new(Some(source));

    ws.cmd().args(["rm", "Report"]).assert().success();

    assert_eq!(
        ws.contents(),
        "TODO:1 \"Plan\" {{\nTODO: ask about \"Report\"\n}}\n"
    );
}

#[test]
fn test_config_init() {
    let ws = Workspace::new(None);

    ws.cmd()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    assert!(config_path(ws.dir.path()).exists());
}

#[test]
fn test_completions() {
    let ws = Workspace::new(None);

    ws.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("todo"));
}
