//! Integration tests for `kiln create` failure paths that stay local.
//!
//! Configuration and template problems are reported before the provider is
//! contacted, so these runs never leave the machine.

#![allow(clippy::expect_used)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kiln(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kiln"));
    cmd.env("NO_COLOR", "1");
    cmd.env("KILN_HOME", home.path());
    cmd
}

#[test]
fn test_create_with_missing_named_config_fails() {
    let home = TempDir::new().expect("temp dir");

    kiln(&home)
        .args(["create", "prod"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Configuration 'prod' not found"));
}

#[test]
fn test_create_without_template_names_the_default_stack() {
    // No config.yaml means defaults, so the missing template is KilnStack's.
    let home = TempDir::new().expect("temp dir");

    kiln(&home)
        .arg("create")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No template found for stack 'KilnStack'",
        ))
        .stderr(predicate::str::contains("KilnStack.yaml"));
}

#[test]
fn test_create_checks_config_before_template() {
    // Even with a template on disk, a mistyped config name fails first.
    let home = TempDir::new().expect("temp dir");
    let templates = home.path().join("templates");
    fs::create_dir_all(&templates).expect("create templates dir");
    fs::write(templates.join("KilnStack.yaml"), "Resources: {}\n").expect("write template");

    kiln(&home)
        .args(["create", "prod"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration 'prod' not found"));
}

#[test]
fn test_create_respects_configured_stack_name() {
    // The named config selects the stack, and the error message proves the
    // template lookup used it.
    let home = TempDir::new().expect("temp dir");
    fs::write(
        home.path().join("prod.yaml"),
        "main:\n  stack_name: Orders\n",
    )
    .expect("write config");

    kiln(&home)
        .args(["create", "prod"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No template found for stack 'Orders'",
        ));
}

#[test]
fn test_create_json_failure_keeps_stdout_empty() {
    // JSON mode owns stdout; failures go to stderr only.
    let home = TempDir::new().expect("temp dir");

    kiln(&home)
        .args(["--json", "create", "prod"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration 'prod' not found"));
}
