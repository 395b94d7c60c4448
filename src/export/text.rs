//! Plain-text report for reading or sharing.
//!
//! Layout: header, score breakdown, critical issues, warnings, passed checks,
//! image optimization and top recommendations, separated by rule lines.

use chrono::SecondsFormat;

use crate::analyze::AnalysisResult;
use crate::config::IMAGE_SAVINGS_NOTABLE_BYTES;
use crate::report::{collect_issues, score_label, Issue};

const RULE_WIDTH: usize = 60;
const TOP_WARNINGS: usize = 5;

/// Formats a byte count with binary (1024) units and at most two decimals.
///
/// `0` gives `"0 Bytes"`; trailing zeros are dropped (`1536` gives `"1.5 KB"`).
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

fn numbered_issues(lines: &mut Vec<String>, issues: &[Issue]) {
    for (idx, item) in issues.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("{}. [{}] {}", idx + 1, item.category, item.issue));
        lines.push(format!("   \u{2192} {}", item.recommendation));
    }
}

/// Renders the full text report.
pub fn render_text_report(result: &AnalysisResult) -> String {
    let rule = "\u{2550}".repeat(RULE_WIDTH);
    let issues = collect_issues(result);
    let scores = &result.scores;
    let images = &result.image_performance;

    let mut lines = vec![
        "SEO ANALYSIS REPORT".to_string(),
        format!(
            "Generated: {}",
            result.analyzed_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        format!("URL: {}", result.url),
        String::new(),
        rule.clone(),
        String::new(),
        format!(
            "OVERALL SEO SCORE: {}/100 ({})",
            scores.overall,
            score_label(scores.overall)
        ),
        String::new(),
        "Score Breakdown:".to_string(),
        format!("- Technical SEO:    {}/100", scores.technical),
        format!("- Content Quality:  {}/100", scores.content),
        format!("- Performance:      {}/100", scores.performance),
        format!("- On-Page SEO:      {}/100", scores.on_page),
        String::new(),
        rule.clone(),
        String::new(),
        format!("CRITICAL ISSUES ({})", issues.critical.len()),
    ];
    numbered_issues(&mut lines, &issues.critical);

    lines.extend([
        String::new(),
        rule.clone(),
        String::new(),
        format!("WARNINGS ({})", issues.warnings.len()),
    ]);
    numbered_issues(&mut lines, &issues.warnings);

    lines.extend([
        String::new(),
        rule.clone(),
        String::new(),
        format!("PASSED CHECKS ({})", issues.passed.len()),
    ]);
    for (idx, item) in issues.passed.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("{}. [{}] {}", idx + 1, item.category, item.item));
    }

    let image_advice = if images.potential_savings > IMAGE_SAVINGS_NOTABLE_BYTES {
        format!(
            "Converting {} legacy images to WebP format could save approximately {} and significantly improve page load time.",
            images.legacy_count,
            format_bytes(images.potential_savings)
        )
    } else {
        "Your images are well optimized!".to_string()
    };
    lines.extend([
        String::new(),
        rule.clone(),
        String::new(),
        "IMAGE OPTIMIZATION REPORT".to_string(),
        format!("Total Images: {}", result.image_analysis.total),
        format!("Using Next-gen Formats: {}", images.next_gen_count),
        format!("Using Legacy Formats: {}", images.legacy_count),
        String::new(),
        format!("Current Image Weight: {}", format_bytes(images.total_weight)),
        format!("Potential Savings: {}", format_bytes(images.potential_savings)),
        format!("Optimized Weight: {}", format_bytes(images.optimized_weight)),
        String::new(),
        "Recommendation:".to_string(),
        image_advice,
        String::new(),
        rule.clone(),
        String::new(),
        "TOP RECOMMENDATIONS".to_string(),
        String::new(),
        "1. IMMEDIATE ACTIONS (Critical)".to_string(),
    ]);

    if issues.critical.is_empty() {
        lines.push("   None - Great job!".to_string());
    } else {
        for (idx, item) in issues.critical.iter().enumerate() {
            lines.push(format!("   {}. {} - {}", idx + 1, item.issue, item.recommendation));
        }
    }

    lines.push(String::new());
    lines.push("2. IMPROVEMENTS (Warnings)".to_string());
    if issues.warnings.is_empty() {
        lines.push("   None - Everything looks good!".to_string());
    } else {
        for (idx, item) in issues.warnings.iter().take(TOP_WARNINGS).enumerate() {
            lines.push(format!("   {}. {} - {}", idx + 1, item.issue, item.recommendation));
        }
    }

    lines.push(String::new());
    lines.push("3. IMAGE OPTIMIZATION".to_string());
    if images.legacy_count > 0 {
        lines.push(format!(
            "   - Convert {} images to WebP format",
            images.legacy_count
        ));
        lines.push(format!(
            "   - Expected savings: {}",
            format_bytes(images.potential_savings)
        ));
        lines.push(format!(
            "   - Improved load time: ~{}% faster",
            (images.potential_savings as f64 / 10_000.0).round()
        ));
    } else {
        lines.push("   - Images are already optimized!".to_string());
    }

    lines.extend([String::new(), rule, String::new(), "End of Report".to_string()]);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(512), "512 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(45_000), "43.95 KB");
        assert_eq!(format_bytes(1_048_576), "1 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_format_bytes_caps_at_gigabytes() {
        assert_eq!(format_bytes(2048 * 1024 * 1024 * 1024), "2048 GB");
    }
}
