//! Integration tests for the config command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_site, jekyll_cmd};

#[test]
fn test_config_set_and_get_template_path() {
    let temp = TempDir::new().unwrap();
    init_site(temp.path());

    jekyll_cmd()
        .current_dir(temp.path())
        .args(["config", "template.path", "_templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set template.path = _templates"));

    let content = fs::read_to_string(temp.path().join(".jekyll-helper/config.toml")).unwrap();
    assert!(content.contains("[template]"));
    assert!(content.contains("path = \"_templates\""));

    jekyll_cmd()
        .current_dir(temp.path())
        .args(["config", "template.path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_templates"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_site(temp.path());

    jekyll_cmd()
        .current_dir(temp.path())
        .args(["config", "editor", "vim"])
        .assert()
        .success();

    jekyll_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("editor = vim"))
        .stdout(predicate::str::contains("template.path = "));
}

#[test]
fn test_config_from_nested_directory() {
    let temp = TempDir::new().unwrap();
    init_site(temp.path());

    jekyll_cmd()
        .current_dir(temp.path().join("_drafts"))
        .args(["config", "editor", "nano"])
        .assert()
        .success();

    assert!(temp.path().join(".jekyll-helper/config.toml").exists());
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    init_site(temp.path());

    jekyll_cmd()
        .current_dir(temp.path())
        .args(["config", "mode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_outside_site_fails() {
    let temp = TempDir::new().unwrap();

    jekyll_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not inside a known workspace"));
}
