//! Output formatter for analysis reports
//!
//! This module handles formatting and exporting analysis reports in various
//! formats, including console output, JSON, HTML and CSV.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use handlebars::Handlebars;
use log::info;
use serde_json::json;

use crate::core::analyzer::AnalysisReport;
use crate::core::concordance::ConcordanceLine;

/// Format concordance lines as an aligned keyword-in-context view
///
/// Left contexts are right-aligned so the keywords line up in one column.
///
/// # Arguments
///
/// * `lines` - Concordance lines to format
/// * `use_color` - Highlight the keyword with terminal colors
///
/// # Returns
///
/// One output line per concordance line
pub fn format_concordance(lines: &[ConcordanceLine], use_color: bool) -> String {
    let lefts: Vec<String> = lines.iter().map(|line| line.left.join(" ")).collect();
    let width = lefts.iter().map(String::len).max().unwrap_or(0);

    let mut output = String::new();
    for (line, left) in lines.iter().zip(&lefts) {
        let keyword = if use_color {
            line.keyword.yellow().bold().to_string()
        } else {
            format!("[{}]", line.keyword)
        };
        let row = format!("{:>width$} {} {}", left, keyword, line.right.join(" "), width = width);
        output.push_str(row.trim_end());
        output.push('\n');
    }
    output
}

/// Format a full report for console output
///
/// # Arguments
///
/// * `report` - The analysis report
/// * `use_color` - Whether to use terminal colors
///
/// # Returns
///
/// Formatted string for console output
pub fn format_report(report: &AnalysisReport, use_color: bool) -> String {
    let heading = |text: &str| {
        if use_color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    };

    let mut output = String::new();
    output.push_str(&format!("{} {}\n", heading("Source:"), report.source));
    output.push_str(&format!(
        "{} {} ({} after stop-word removal)\n\n",
        heading("Tokens:"),
        report.total_tokens,
        report.filtered_tokens
    ));

    output.push_str(&format!("{}\n", heading("Top words")));
    for entry in &report.top_words {
        output.push_str(&format!("    - {}: {}\n", entry.word, entry.count));
    }
    output.push('\n');

    output.push_str(&format!(
        "{} '{}' ({} found)\n",
        heading("Concordance for"),
        report.word,
        report.occurrences()
    ));
    if report.concordance.is_empty() {
        output.push_str("No occurrences found.\n");
    } else {
        output.push_str(&format_concordance(&report.concordance, use_color));
    }

    output
}

/// Export a report to a JSON file
///
/// # Arguments
///
/// * `report` - The analysis report
/// * `output_path` - Path where the JSON file will be written
pub fn export_report_json(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(file, report).context("Failed to write JSON data")?;

    info!("JSON report written to {}", output_path.display());
    Ok(())
}

/// Create a CSV file with one row per concordance line
///
/// Columns are `left`, `keyword` and `right`; context tokens are joined with
/// single spaces.
pub fn create_csv_report(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)
        .context(format!("Failed to create CSV output file: {}", output_path.display()))?;

    writer.write_record(["left", "keyword", "right"])?;
    for line in &report.concordance {
        writer.write_record([
            line.left.join(" ").as_str(),
            line.keyword.as_str(),
            line.right.join(" ").as_str(),
        ])?;
    }
    writer.flush().context("Failed to write CSV data")?;

    info!("CSV report written to {}", output_path.display());
    Ok(())
}

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Concordance Report</title>
    <style>
        body { font-family: Arial, sans-serif; color: #333; max-width: 1000px; margin: 0 auto; padding: 20px; }
        h1 { color: #2c3e50; border-bottom: 2px solid #3498db; padding-bottom: 10px; }
        h2 { color: #2980b9; margin-top: 30px; }
        .timestamp { color: #7f8c8d; font-size: 0.9em; margin-bottom: 30px; }
        .summary { background-color: #e8f4f8; padding: 15px; border-radius: 5px; }
        table.kwic td { padding: 2px 6px; font-family: monospace; }
        td.left { text-align: right; }
        td.keyword { font-weight: bold; color: #c0392b; }
    </style>
</head>
<body>
    <h1>Concordance Report</h1>
    <div class="timestamp">Generated on: {{timestamp}}</div>

    <div class="summary">
        <p>Source: {{source}}</p>
        <p>Tokens: {{total_tokens}} ({{filtered_tokens}} after stop-word removal)</p>
    </div>

    <h2>Top words</h2>
    <ul>
        {{#each top_words}}
        <li>{{word}}: {{count}}</li>
        {{/each}}
    </ul>

    <h2>Concordance for "{{word}}" ({{occurrences}} found)</h2>
    <table class="kwic">
        {{#each lines}}
        <tr><td class="left">{{left}}</td><td class="keyword">{{keyword}}</td><td>{{right}}</td></tr>
        {{/each}}
    </table>
</body>
</html>
"#;

/// Create an HTML report
///
/// # Arguments
///
/// * `report` - The analysis report
/// * `output_path` - Path where the HTML file will be written
pub fn create_html_report(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let mut handlebars = Handlebars::new();
    handlebars
        .register_template_string("report", HTML_TEMPLATE)
        .context("Failed to register HTML template")?;

    let lines: Vec<_> = report
        .concordance
        .iter()
        .map(|line| {
            json!({
                "left": line.left.join(" "),
                "keyword": line.keyword,
                "right": line.right.join(" "),
            })
        })
        .collect();

    let data = json!({
        "timestamp": report.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        "source": report.source,
        "word": report.word,
        "total_tokens": report.total_tokens,
        "filtered_tokens": report.filtered_tokens,
        "top_words": report.top_words,
        "occurrences": report.occurrences(),
        "lines": lines,
    });

    let file = File::create(output_path)
        .context(format!("Failed to create HTML output file: {}", output_path.display()))?;
    handlebars
        .render_to_write("report", &data, file)
        .context("Failed to render HTML report")?;

    info!("HTML report written to {}", output_path.display());
    Ok(())
}
