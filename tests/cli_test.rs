//! Binary-level tests: console contract and exit codes.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

const OLD_STYLE_ICON: &str =
    r#"<svg viewBox="0 0 24 24" {...$$restProps}><path d="M1 1"/></svg>"#;

#[test]
fn prints_one_line_per_file_and_a_summary() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Arrow.svelte"), OLD_STYLE_ICON).unwrap();
    fs::write(temp.path().join("Menu.svelte"), OLD_STYLE_ICON).unwrap();

    let output = Command::cargo_bin("iconmod")
        .unwrap()
        .arg(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Updated: Arrow.svelte"));
    assert!(stdout.contains("Updated: Menu.svelte"));
    assert!(stdout.contains("All icons updated successfully!"));
}

#[test]
fn default_skip_leaves_home_component_alone() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Home.svelte"), OLD_STYLE_ICON).unwrap();

    let output = Command::cargo_bin("iconmod")
        .unwrap()
        .arg(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Updated: Home.svelte"));
    assert_eq!(
        fs::read_to_string(temp.path().join("Home.svelte")).unwrap(),
        OLD_STYLE_ICON
    );
}

#[test]
fn custom_skip_overrides_the_default() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Home.svelte"), OLD_STYLE_ICON).unwrap();
    fs::write(temp.path().join("Star.svelte"), OLD_STYLE_ICON).unwrap();

    let output = Command::cargo_bin("iconmod")
        .unwrap()
        .arg(temp.path())
        .arg("--skip")
        .arg("Star.svelte")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // Home.svelte is only skipped by default; naming Star.svelte replaces it.
    assert!(stdout.contains("Updated: Home.svelte"));
    assert!(!stdout.contains("Updated: Star.svelte"));
}

#[test]
fn missing_directory_exits_nonzero() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("iconmod")
        .unwrap()
        .arg(temp.path().join("no-such-dir"))
        .assert()
        .failure();
}
