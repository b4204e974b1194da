use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn erstats(config: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("erstats");
    cmd.env("RUST_LOG", "warn").arg("--config").arg(config);
    cmd
}

fn config_in(tmp: &TempDir) -> PathBuf {
    tmp.path().join("erstats").join("config.json")
}

#[test]
fn quick_stats_prints_sidebar_figures() {
    let tmp = TempDir::new().unwrap();
    erstats(&config_in(&tmp))
        .arg("quick-stats")
        .assert()
        .success()
        .stdout(contains("📈 Quick Stats"))
        .stdout(contains("PH ER+ Cases (2024): 14,200"))
        .stdout(contains("5-Year Survival: 78%"));
}

#[test]
fn quick_stats_json_is_parseable() {
    let tmp = TempDir::new().unwrap();
    let out = erstats(&config_in(&tmp))
        .args(["quick-stats", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["metrics"].as_array().unwrap().len(), 3);
    assert_eq!(json["metrics"][1]["value"], "70%");
}

#[test]
fn hospitals_lists_lookup_keys() {
    let tmp = TempDir::new().unwrap();
    let out = erstats(&config_in(&tmp))
        .arg("hospitals")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 10);
    assert!(text.lines().next().unwrap().starts_with("Philippine General Hospital\tManila"));
    assert_eq!(text.matches("(details)").count(), 2);
}

#[test]
fn validate_passes_on_shipped_data() {
    let tmp = TempDir::new().unwrap();
    erstats(&config_in(&tmp))
        .arg("validate")
        .assert()
        .success()
        .stdout(contains("14 record sets OK"));
}

#[test]
fn render_html_to_stdout() {
    let tmp = TempDir::new().unwrap();
    erstats(&config_in(&tmp))
        .args(["render", "--format", "html"])
        .assert()
        .success()
        .stdout(contains("<!doctype html>"))
        .stdout(contains("<title>ER+ Statistics</title>"))
        .stdout(contains("Last Updated:"));
}

#[test]
fn render_markdown_with_selected_hospital() {
    let tmp = TempDir::new().unwrap();
    erstats(&config_in(&tmp))
        .args(["render", "-f", "markdown", "--hospital", "Philippine General Hospital"])
        .assert()
        .success()
        .stdout(contains("**Contact:** (02) 8554-8400"));

    erstats(&config_in(&tmp))
        .args(["render", "-f", "markdown", "--hospital", "The Medical City"])
        .assert()
        .success()
        .stdout(contains("Hospital Details").not())
        .stdout(contains("**Contact:**").not());
}

#[test]
fn docx_needs_an_output_path() {
    let tmp = TempDir::new().unwrap();
    erstats(&config_in(&tmp))
        .args(["render", "--format", "docx"])
        .assert()
        .failure()
        .stderr(contains("--out"));

    let out = tmp.path().join("report.docx");
    erstats(&config_in(&tmp))
        .args(["render", "--format", "docx", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let bytes = fs::read(&out).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn unknown_format_is_rejected() {
    let tmp = TempDir::new().unwrap();
    erstats(&config_in(&tmp))
        .args(["render", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(contains("unknown format 'pdf'"));
}

#[test]
fn config_lifecycle() {
    let tmp = TempDir::new().unwrap();
    let path = config_in(&tmp);

    erstats(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(contains("wrote"));
    assert!(path.exists());

    erstats(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("\"config_version\": 1"))
        .stdout(contains("\"default_format\": \"html\""));

    erstats(&path)
        .args(["config", "reset"])
        .assert()
        .success()
        .stdout(contains("removed"));
    assert!(!path.exists());
}

#[test]
fn configured_defaults_drive_render() {
    let tmp = TempDir::new().unwrap();
    let path = config_in(&tmp);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{
            "config_version": 1,
            "default_format": "markdown",
            "default_hospital": "St. Luke's Medical Center - BGC",
            "output_dir": null
        }"#,
    )
    .unwrap();

    erstats(&path)
        .arg("render")
        .assert()
        .success()
        .stdout(contains("# 📊 Live ER+ Breast Cancer Statistics"))
        .stdout(contains("(02) 7789-7700"));
}
