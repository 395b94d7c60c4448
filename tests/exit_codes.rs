//! Exit codes and stdout of the binary, run offline against a local HTML file.

use std::process::Command;
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

fn write_page(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("page.html");
    std::fs::write(&path, helpers::healthy_page()).expect("Failed to write page");
    path
}

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_seo_analyzer"))
}

#[test]
fn test_html_file_run_prints_json_and_exits_zero() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let page = write_page(&dir);

    let output = binary()
        .args(["https://example.com/", "--html-file"])
        .arg(&page)
        .args(["--load-time-ms", "700", "--log-level", "error"])
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be the JSON result");
    assert_eq!(value["url"], "https://example.com/");
    assert_eq!(value["loadTime"]["estimatedTime"], 700.0);
    // No network access: the sitemap counts as missing
    assert_eq!(value["sitemap"]["present"], false);
}

#[test]
fn test_url_without_scheme_is_normalized() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let page = write_page(&dir);

    let output = binary()
        .args(["example.com", "--format", "csv", "--log-level", "error", "--html-file"])
        .arg(&page)
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout
            .lines()
            .any(|line| line.trim_end() == "URL,https://example.com"),
        "stdout: {stdout}"
    );
}

#[test]
fn test_depth_above_zero_exits_one() {
    let output = binary()
        .args(["https://example.com/", "--depth", "1", "--log-level", "error"])
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("depth"), "stderr: {stderr}");
}

#[test]
fn test_invalid_url_exits_one() {
    let output = binary()
        .args(["ftp://example.com/", "--log-level", "error"])
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("seo_analyzer error"));
}

#[test]
fn test_missing_html_file_exits_one() {
    let output = binary()
        .args([
            "https://example.com/",
            "--html-file",
            "/nonexistent/page.html",
            "--log-level",
            "error",
        ])
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read HTML file"));
}
