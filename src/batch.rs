use std::path::Path;

use anyhow::{Context, Result, bail};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::compare::compare;
use crate::input::read_text;
use crate::report::{BatchEntry, BatchManifest, Warning, WarningKind, warning};

pub struct BatchConfig<'a> {
    pub actual_dir: &'a Path,
    pub generated_dir: &'a Path,
    pub strict: bool,
}

/// Compares every file under `actual_dir` with the file at the same relative
/// path under `generated_dir`.
pub fn compare_dirs(config: &BatchConfig<'_>) -> Result<BatchManifest> {
    if !config.actual_dir.is_dir() {
        bail!(
            "actual directory does not exist: {}",
            config.actual_dir.display()
        );
    }
    if !config.generated_dir.is_dir() {
        bail!(
            "generated directory does not exist: {}",
            config.generated_dir.display()
        );
    }

    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    let walker = WalkDir::new(config.actual_dir).sort_by_file_name();
    for entry in walker {
        let entry = entry
            .with_context(|| format!("failed to walk {}", config.actual_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel_path = entry
            .path()
            .strip_prefix(config.actual_dir)
            .unwrap_or(entry.path());
        let rel_display = rel_path.to_string_lossy().replace('\\', "/");
        let generated_path = config.generated_dir.join(rel_path);

        if !generated_path.exists() {
            let message = format!(
                "no generated summary for {} (expected {})",
                rel_display,
                generated_path.display()
            );
            record(
                config.strict,
                WarningKind::MissingCounterpart,
                message,
                &mut warnings,
            )?;
            continue;
        }

        let actual = match read_text(entry.path()) {
            Ok(text) => text,
            Err(err) => {
                record(
                    config.strict,
                    WarningKind::UnreadableFile,
                    format!("{err:#}"),
                    &mut warnings,
                )?;
                continue;
            }
        };
        let generated = match read_text(&generated_path) {
            Ok(text) => text,
            Err(err) => {
                record(
                    config.strict,
                    WarningKind::UnreadableFile,
                    format!("{err:#}"),
                    &mut warnings,
                )?;
                continue;
            }
        };

        match compare(&actual, &generated) {
            Ok(report) => {
                info!(
                    pair = %rel_display,
                    common_words = report.common_words.len(),
                    common_phrases = report.common_phrases.len(),
                    "compared pair"
                );
                entries.push(BatchEntry {
                    rel_path: rel_display,
                    report,
                });
            }
            Err(err) => {
                record(
                    config.strict,
                    WarningKind::MissingInput,
                    format!("{rel_display}: {err}"),
                    &mut warnings,
                )?;
            }
        }
    }

    Ok(BatchManifest {
        generated_at: now_rfc3339(),
        actual_dir: config.actual_dir.to_path_buf(),
        generated_dir: config.generated_dir.to_path_buf(),
        entries,
        warnings,
    })
}

fn record(
    strict: bool,
    kind: WarningKind,
    message: String,
    warnings: &mut Vec<Warning>,
) -> Result<()> {
    if strict {
        bail!(message);
    }
    warn!(kind = ?kind, "{message}");
    warnings.push(warning(kind, message));
    Ok(())
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
