//! CLI integration tests using the REAL cfgmeta binary

mod common;

use predicates::prelude::*;

#[test]
fn test_help_output() {
    common::cfgmeta_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("setters"))
        .stdout(predicate::str::contains("list-setters"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_list_setters_help_output() {
    common::cfgmeta_cmd()
        .args(["list-setters", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--markdown"))
        .stdout(predicate::str::contains("--include-subst"))
        .stdout(predicate::str::contains("--fail-on-empty"));
}

#[test]
fn test_version_output() {
    common::cfgmeta_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cfgmeta"))
        .stdout(predicate::str::contains("File: Krmfile"))
        .stdout(predicate::str::contains("MSRV:"));
}

#[test]
fn test_list_setters_requires_dir() {
    common::cfgmeta_cmd()
        .arg("list-setters")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<DIR>"));
}

#[test]
fn test_completions_bash() {
    common::cfgmeta_cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cfgmeta"));
}

#[test]
fn test_completions_unknown_shell() {
    common::cfgmeta_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'tcsh'"))
        .stderr(predicate::str::contains("bash"));
}
