//! End-to-end tests for the qspin binary.
//!
//! Network-touching commands are not exercised here; these cover argument
//! parsing, config storage, and credential plumbing against an isolated
//! home directory.

use assert_cmd::Command;
use predicates::prelude::*;

fn qspin(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("qspin").unwrap();
    cmd.env("HOME", home.path());
    cmd.env_remove("QSPIN_TOKEN");
    cmd.env_remove("QSPIN_REFRESH_TOKEN");
    cmd.env_remove("QSPIN_API_URL");
    cmd.env_remove("QSPIN_ENV");
    cmd
}

#[test]
fn help_lists_top_level_commands() {
    let home = tempfile::tempdir().unwrap();
    qspin(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("service"))
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag_reports_package_name() {
    let home = tempfile::tempdir().unwrap();
    qspin(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("qspin"));
}

#[test]
fn version_command_shows_build_details() {
    let home = tempfile::tempdir().unwrap();
    qspin(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("commit:"))
        .stdout(predicate::str::contains("api url:"));
}

#[test]
fn config_get_reads_defaults_without_a_file() {
    let home = tempfile::tempdir().unwrap();
    qspin(&home)
        .args(["config", "get", "defaults.output"])
        .assert()
        .success()
        .stdout(predicate::str::contains("table"));
}

#[test]
fn config_set_round_trips_through_the_file() {
    let home = tempfile::tempdir().unwrap();
    qspin(&home)
        .args(["config", "set", "defaults.region", "eu-west-1"])
        .assert()
        .success();
    qspin(&home)
        .args(["config", "get", "defaults.region"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eu-west-1"));
}

#[test]
fn config_set_rejects_unknown_keys() {
    let home = tempfile::tempdir().unwrap();
    qspin(&home)
        .args(["config", "set", "telemetry.enabled", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn config_init_refuses_to_clobber_without_force() {
    let home = tempfile::tempdir().unwrap();
    qspin(&home).args(["config", "init"]).assert().success();
    qspin(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    qspin(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn auth_token_fails_cleanly_when_logged_out() {
    let home = tempfile::tempdir().unwrap();
    qspin(&home)
        .args(["auth", "token"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("qspin auth login"));
}

#[test]
fn auth_token_prints_the_env_override() {
    let home = tempfile::tempdir().unwrap();
    qspin(&home)
        .env("QSPIN_TOKEN", "tok-from-env")
        .args(["auth", "token"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tok-from-env"));
}

#[test]
fn service_create_rejects_unknown_type() {
    let home = tempfile::tempdir().unwrap();
    qspin(&home)
        .args(["service", "create", "cache", "--type", "memcached"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown service type"));
}
