//! Markdown summary of a merged report.

use std::fmt::Display;

use ahx_core::constants::MARKDOWN_MAX_FILES;

use super::artifact::MergedReport;

pub fn render_markdown(report: &MergedReport) -> String {
    let mut lines = vec![
        "# AHX Report".to_string(),
        String::new(),
        "## Routes".to_string(),
    ];
    for route in &report.routes {
        let m = &route.metrics;
        lines.push(format!(
            "- {}: score={} LCP={} TBT={} CLS={} JS={}",
            route.route,
            route.score,
            or_dash(m.lcp),
            or_dash(m.tbt),
            or_dash(m.cls),
            or_dash(m.js_bytes),
        ));
    }
    lines.push(String::new());
    lines.push("## Components".to_string());
    for file in report.files.iter().take(MARKDOWN_MAX_FILES) {
        lines.push(format!("- {}: score={}", file.report.file, file.score));
    }
    lines.join("\n")
}

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
