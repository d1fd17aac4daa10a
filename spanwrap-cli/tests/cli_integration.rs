//! Integration tests for the spanwrap CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn spanwrap() -> Command {
    Command::cargo_bin("spanwrap").unwrap()
}

#[test]
fn test_split_default_separator() {
    spanwrap()
        .arg("split")
        .arg("-i")
        .arg(fixture_path("intro.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<span>hello</span> <span>world</span> <br><span>foo</span> ",
        ));
}

#[test]
fn test_split_regex_separator() {
    spanwrap()
        .args(["split", "-i", &fixture_path("colors.html"), "-s", "[,;]", "--regex"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<span>red</span> <span>green</span> <span>blue</span> <br><span>cyan</span> ",
        ));
}

#[test]
fn test_split_custom_tag() {
    spanwrap()
        .args(["split", "-i", &fixture_path("intro.html"), "-t", "em"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<em>hello</em>"))
        .stdout(predicate::str::contains("<span>").not());
}

#[test]
fn test_json_output() {
    spanwrap()
        .args(["split", "-i", &fixture_path("intro.html"), "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\""))
        .stdout(predicate::str::contains("\"segments\""))
        .stdout(predicate::str::contains("\"world\""));
}

#[test]
fn test_markdown_output() {
    spanwrap()
        .args(["split", "-i", &fixture_path("intro.html"), "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. hello"))
        .stdout(predicate::str::contains("3. foo"))
        .stdout(predicate::str::contains("*Total segments: 3*"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("out.html");

    spanwrap()
        .args(["split", "-q", "-i", &fixture_path("intro.html"), "-o"])
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("<span>foo</span>"));
}

#[test]
fn test_glob_pattern() {
    spanwrap()
        .args(["split", "-i", &fixture_path("*.html"), "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("colors.html"))
        .stdout(predicate::str::contains("intro.html"));
}

#[test]
fn test_config_file_sets_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("spanwrap.toml");
    fs::write(
        &config,
        "[segmenter]\nseparator = \"[,;]\"\nregex = true\ntag = \"b\"\n\n[output]\ndefault_format = \"markdown\"\n",
    )
    .unwrap();

    spanwrap()
        .args(["split", "-i", &fixture_path("colors.html"), "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("2. green"))
        .stdout(predicate::str::contains("*Total segments: 4*"));
}

#[test]
fn test_invalid_regex_fails() {
    spanwrap()
        .args(["split", "-i", &fixture_path("intro.html"), "-s", "(", "--regex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid separator pattern"));
}

#[test]
fn test_invalid_file() {
    spanwrap()
        .args(["split", "-i", "nonexistent.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_generate_then_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("spanwrap.toml");

    spanwrap()
        .args(["generate-config", "-o"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration written"));

    spanwrap()
        .args(["validate", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_check_url_malformed() {
    spanwrap()
        .args(["check-url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL check failed"));
}

#[test]
fn test_help_command() {
    spanwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrap the words of HTML fragments"));
}
