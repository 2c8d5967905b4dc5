//! Unit tests for the directory-backed template source.

#![allow(clippy::expect_used)]

use std::fs;

use kiln_cli::application::ports::TemplateSource;
use kiln_cli::infra::templates::DirTemplateSource;
use tempfile::TempDir;

fn source_with(files: &[(&str, &str)]) -> (TempDir, DirTemplateSource) {
    let dir = TempDir::new().expect("temp dir");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("write template");
    }
    let source = DirTemplateSource::new(dir.path().to_path_buf());
    (dir, source)
}

#[test]
fn loads_the_yaml_template_for_a_stack() {
    let (_dir, source) = source_with(&[("Web.yaml", "Resources: {}\n")]);

    let template = source.load("Web").expect("template should load");

    assert_eq!(template.as_bytes(), b"Resources: {}\n");
}

#[test]
fn yaml_wins_over_yml_and_json() {
    let (_dir, source) = source_with(&[
        ("Web.yaml", "from: yaml\n"),
        ("Web.yml", "from: yml\n"),
        ("Web.json", "{\"from\":\"json\"}"),
    ]);

    let template = source.load("Web").expect("template should load");

    assert_eq!(template.body(), "from: yaml\n");
}

#[test]
fn yml_wins_over_json() {
    let (_dir, source) = source_with(&[
        ("Web.yml", "from: yml\n"),
        ("Web.json", "{\"from\":\"json\"}"),
    ]);

    let template = source.load("Web").expect("template should load");

    assert_eq!(template.body(), "from: yml\n");
}

#[test]
fn json_is_the_last_resort() {
    let (_dir, source) = source_with(&[("Web.json", "{\"from\":\"json\"}")]);

    let template = source.load("Web").expect("template should load");

    assert_eq!(template.body(), "{\"from\":\"json\"}");
}

#[test]
fn loading_twice_yields_identical_bytes() {
    let (_dir, source) = source_with(&[("Web.yaml", "Resources: {}\n")]);

    let first = source.load("Web").expect("first load");
    let second = source.load("Web").expect("second load");

    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn lookup_is_per_stack_name() {
    let (_dir, source) = source_with(&[("Web.yaml", "web\n"), ("Db.yaml", "db\n")]);

    assert_eq!(source.load("Db").expect("loads").body(), "db\n");
}

#[test]
fn missing_template_names_the_stack_and_the_probed_paths() {
    let (dir, source) = source_with(&[("Other.yaml", "x\n")]);

    let err = source.load("Web").expect_err("must fail");

    let message = err.to_string();
    assert!(message.contains("No template found for stack 'Web'"), "{message}");
    assert!(message.contains(&dir.path().display().to_string()), "{message}");
    assert!(message.contains("Web.yaml, Web.yml, or Web.json"), "{message}");
}
