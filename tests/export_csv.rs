//! Tests for file export in every output format.

use seo_analyzer::export::export_result;
use seo_analyzer::OutputFormat;
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{analyze_fixed, healthy_page};

fn read_csv(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .expect("Failed to open exported CSV");
    reader
        .records()
        .map(|record| {
            record
                .expect("Failed to read CSV record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

fn value<'a>(rows: &'a [Vec<String>], label: &str) -> &'a str {
    rows.iter()
        .find(|row| row.len() == 2 && row[0] == label)
        .map(|row| row[1].as_str())
        .unwrap_or_else(|| panic!("Missing row '{label}'"))
}

#[test]
fn test_export_csv_to_file() {
    let result = analyze_fixed(&healthy_page(), 800.0);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.csv");

    export_result(&result, OutputFormat::Csv, Some(&path)).expect("CSV export should succeed");
    let rows = read_csv(&path);

    assert_eq!(rows[0], vec!["SEO Analysis Report".to_string()]);
    assert_eq!(value(&rows, "URL"), helpers::TEST_URL);
    assert_eq!(value(&rows, "Analyzed At"), "2024-06-01T09:00:00Z");
    assert_eq!(value(&rows, "Overall Score"), result.scores.overall.to_string());
    assert_eq!(value(&rows, "Has Canonical"), "Yes");
    // No sitemap probe in these fixtures
    assert_eq!(value(&rows, "Has Sitemap"), "No");
    assert_eq!(value(&rows, "H1 Count"), "1");
    assert_eq!(value(&rows, "Load Time (ms)"), "800");
}

#[test]
fn test_export_csv_section_layout() {
    let result = analyze_fixed(&helpers::page("", "<p>tiny</p>"), 100.0);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("sections.csv");

    export_result(&result, OutputFormat::Csv, Some(&path)).expect("CSV export should succeed");
    let rows = read_csv(&path);

    let sections: Vec<&str> = rows
        .iter()
        .filter(|row| row.len() == 1 && !row[0].is_empty())
        .map(|row| row[0].as_str())
        .collect();
    assert_eq!(
        sections,
        vec![
            "SEO Analysis Report",
            "SCORES",
            "TECHNICAL SEO",
            "CONTENT",
            "PERFORMANCE",
            "ON-PAGE SEO",
            "IMAGE OPTIMIZATION"
        ]
    );
    assert_eq!(value(&rows, "Has Open Graph"), "No");
    assert_eq!(value(&rows, "Potential Savings (bytes)"), "0");

    let raw = std::fs::read_to_string(&path).expect("Failed to read exported CSV");
    assert_eq!(raw.lines().filter(|line| line.is_empty()).count(), 6);
    assert_eq!(value(&rows, "Total Images"), "0");
}

#[test]
fn test_export_json_to_file() {
    let result = analyze_fixed(&healthy_page(), 800.0);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.json");

    export_result(&result, OutputFormat::Json, Some(&path)).expect("JSON export should succeed");
    let text = std::fs::read_to_string(&path).expect("Failed to read JSON export");
    let value: serde_json::Value = serde_json::from_str(&text).expect("Export should be JSON");

    assert_eq!(value["url"], helpers::TEST_URL);
    assert_eq!(value["analyzedAt"], "2024-06-01T09:00:00Z");
    assert_eq!(value["scores"]["overall"], result.scores.overall);
    assert_eq!(value["metaTags"]["title"]["status"], "passed");
    assert!(value["headingAnalysis"]["hierarchy"].is_array());
}

#[test]
fn test_export_text_report_to_file() {
    let result = analyze_fixed(&helpers::page("<title>Hi</title>", "<p>tiny</p>"), 4200.0);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.txt");

    export_result(&result, OutputFormat::Report, Some(&path)).expect("Text export should succeed");
    let text = std::fs::read_to_string(&path).expect("Failed to read text export");

    assert!(text.contains(helpers::TEST_URL));
    assert!(text.contains("End of Report"));
    assert!(text.contains("Missing or very short meta description"));
}

#[test]
fn test_export_to_missing_directory_fails_with_context() {
    let result = analyze_fixed(&healthy_page(), 800.0);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("no/such/dir/report.csv");

    let err = export_result(&result, OutputFormat::Csv, Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("report.csv"));
}
