use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn termfolio(home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("termfolio");
    cmd.env("TERMFOLIO_HOME", home).env_remove("TERMFOLIO_LOG");
    cmd
}

#[test]
fn test_exec_alias_matches_canonical() {
    let dir = tempdir().unwrap();

    let ls = termfolio(dir.path()).args(["exec", "ls"]).output().unwrap();
    let projects = termfolio(dir.path())
        .args(["exec", "projects"])
        .output()
        .unwrap();

    assert!(ls.status.success());
    assert_eq!(ls.stdout, projects.stdout);
    assert!(String::from_utf8_lossy(&ls.stdout).contains("My Projects:"));
}

#[test]
fn test_exec_help_lists_commands() {
    let dir = tempdir().unwrap();

    termfolio(dir.path())
        .args(["exec", "help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands:"))
        .stdout(predicate::str::contains("alias: ls"))
        .stdout(predicate::str::contains("matrix"));
}

#[test]
fn test_exec_project_lookup() {
    let dir = tempdir().unwrap();

    termfolio(dir.path())
        .args(["exec", "project", "terminal", "portfolio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal Portfolio"))
        .stdout(predicate::str::contains("Project Link"));

    termfolio(dir.path())
        .args(["exec", "project", "Foo", "Bar"])
        .assert()
        .success()
        .stdout("Project not found.\n");
}

#[test]
fn test_exec_theme_messages() {
    let dir = tempdir().unwrap();

    termfolio(dir.path())
        .args(["exec", "theme", "light"])
        .assert()
        .success()
        .stdout("Theme switched to light.\n");

    termfolio(dir.path())
        .args(["exec", "theme", "purple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid theme"));
}

#[test]
fn test_exec_unknown_command() {
    let dir = tempdir().unwrap();

    termfolio(dir.path())
        .args(["exec", "FooBar"])
        .assert()
        .success()
        .stdout("Command not found: foobar\n");
}

#[test]
fn test_exec_clear_prints_nothing() {
    let dir = tempdir().unwrap();

    termfolio(dir.path())
        .args(["exec", "clear"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_data_dir_overrides_projects() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(
        data.join("projects.json"),
        r#"[{"name": "Widget", "description": "A widget.", "url": "https://w.example"}]"#,
    )
    .unwrap();

    termfolio(dir.path())
        .arg("--data-dir")
        .arg(&data)
        .args(["exec", "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Widget: A widget."))
        .stdout(predicate::str::contains("Terminal Portfolio").not());
}

#[test]
fn test_data_dir_from_config() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(
        data.join("contact.json"),
        r#"{"email": "me@site.example", "github": "https://github.com/me", "linkedin": "https://linkedin.com/in/me"}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("config.toml"),
        format!("data_dir = {:?}\n", data.display().to_string()),
    )
    .unwrap();

    termfolio(dir.path())
        .args(["exec", "contact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email: me@site.example"));
}

#[test]
fn test_missing_data_dir_fails() {
    let dir = tempdir().unwrap();

    termfolio(dir.path())
        .args(["--data-dir", "/nonexistent/termfolio-data", "exec", "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Data directory not found"));
}

#[test]
fn test_piped_stdin_runs_each_line() {
    let dir = tempdir().unwrap();

    termfolio(dir.path())
        .write_stdin("hello\n\nsudo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello there!"))
        .stdout(predicate::str::contains("Permission denied"));
}
