use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::report::{BatchManifest, ComparisonReport, Warning, WarningKind};

pub fn summarize(report: &ComparisonReport) -> String {
    let mut output = String::new();
    output.push_str("Word counts:\n");
    output.push_str(&format!(
        "  Actual summary: {} words\n",
        report.word_count_actual
    ));
    output.push_str(&format!(
        "  Generated summary: {} words\n",
        report.word_count_generated
    ));

    output.push_str(&format!("Common words ({}):\n", report.common_words.len()));
    if report.common_words.is_empty() {
        output.push_str("  (none)\n");
    } else {
        let words: Vec<&str> = report.common_words.iter().map(String::as_str).collect();
        output.push_str(&format!("  {}\n", words.join(", ")));
    }

    output.push_str(&format!(
        "Common phrases ({}):\n",
        report.common_phrases.len()
    ));
    if report.common_phrases.is_empty() {
        output.push_str("  (none)\n");
    } else {
        for phrase in &report.common_phrases {
            output.push_str(&format!("  - {}\n", phrase));
        }
    }

    output.trim_end().to_string()
}

pub fn summarize_batch(manifest: &BatchManifest) -> String {
    let mut output = String::new();
    output.push_str(&format!("Actual: {}\n", manifest.actual_dir.display()));
    output.push_str(&format!(
        "Generated: {}\n",
        manifest.generated_dir.display()
    ));
    output.push_str(&format!("Pairs compared: {}\n", manifest.entries.len()));

    for entry in &manifest.entries {
        output.push_str(&format!("\n== {}\n", entry.rel_path));
        output.push_str(&summarize(&entry.report));
        output.push('\n');
    }

    output.push_str(&format!("\nWarnings: {}\n", manifest.warnings.len()));
    for Warning { kind, message } in &manifest.warnings {
        output.push_str(&format!("  - [{}] {}\n", format_kind(kind), message));
    }

    output.trim_end().to_string()
}

fn format_kind(kind: &WarningKind) -> &'static str {
    match kind {
        WarningKind::MissingCounterpart => "missing_counterpart",
        WarningKind::MissingInput => "missing_input",
        WarningKind::UnreadableFile => "unreadable_file",
    }
}

pub fn render_report(report: &ComparisonReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summarize(report)),
        OutputFormat::Json => to_json(report),
        OutputFormat::Yaml => to_yaml(report),
    }
}

pub fn render_batch(manifest: &BatchManifest, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summarize_batch(manifest)),
        OutputFormat::Json => to_json(manifest),
        OutputFormat::Yaml => to_yaml(manifest),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize JSON output")
}

fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    serde_yaml_bw::to_string(value).context("failed to serialize YAML output")
}

/// Writes `rendered` to `out`, or to stdout when no path is given.
pub fn emit(rendered: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            let mut contents = rendered.trim_end().to_string();
            contents.push('\n');
            fs::write(path, contents)
                .with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered.trim_end()).context("failed to write to stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;

    #[test]
    fn text_summary_lists_words_and_phrases() {
        let report = compare("the quick brown fox", "the quick brown fox jumps").unwrap();
        let text = summarize(&report);
        assert!(text.contains("Actual summary: 4 words"));
        assert!(text.contains("Generated summary: 5 words"));
        assert!(text.contains("  brown, fox, quick, the"));
        assert!(text.contains("  - the quick brown fox"));
    }

    #[test]
    fn text_summary_marks_empty_sets() {
        let report = compare("alpha beta", "gamma delta").unwrap();
        let text = summarize(&report);
        assert!(text.contains("Common words (0):\n  (none)"));
        assert!(text.ends_with("Common phrases (0):\n  (none)"));
    }

    #[test]
    fn json_uses_snake_case_fields() {
        let report = compare("a b", "a b").unwrap();
        let json = render_report(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["word_count_actual"], 2);
        assert_eq!(value["common_phrases"][0], "a b");
    }

    #[test]
    fn yaml_contains_report_fields() {
        let report = compare("a b", "b c").unwrap();
        let yaml = render_report(&report, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("word_count_generated: 2"));
        assert!(yaml.contains("common_words:"));
    }
}
