use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("termfolio")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("exec"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--theme"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("termfolio")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_invalid_theme_flag_rejected() {
    cargo_bin_cmd!("termfolio")
        .args(["--theme", "purple", "exec", "help"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("purple"));
}

#[test]
fn test_exec_requires_a_command() {
    cargo_bin_cmd!("termfolio")
        .arg("exec")
        .assert()
        .failure();
}
