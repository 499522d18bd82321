use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Which of the two summaries an input belongs to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SummaryKind {
    Actual,
    Generated,
}

impl fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryKind::Actual => f.write_str("actual"),
            SummaryKind::Generated => f.write_str("generated"),
        }
    }
}

/// Overlap statistics between an actual and a generated summary.
#[derive(Debug, Serialize, Clone, Eq, PartialEq)]
pub struct ComparisonReport {
    pub common_words: BTreeSet<String>,
    pub common_phrases: BTreeSet<String>,
    pub word_count_actual: usize,
    pub word_count_generated: usize,
}

impl ComparisonReport {
    /// Token length of the reported phrases, if any were found.
    pub fn phrase_length(&self) -> Option<usize> {
        self.common_phrases
            .iter()
            .next()
            .map(|phrase| phrase.split(' ').count())
    }
}

#[derive(Debug, Serialize)]
pub struct BatchManifest {
    pub generated_at: String,
    pub actual_dir: PathBuf,
    pub generated_dir: PathBuf,
    pub entries: Vec<BatchEntry>,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub rel_path: String,
    pub report: ComparisonReport,
}

#[derive(Debug, Serialize, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Serialize, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    MissingCounterpart,
    MissingInput,
    UnreadableFile,
}

pub fn warning(kind: WarningKind, message: impl Into<String>) -> Warning {
    Warning {
        kind,
        message: message.into(),
    }
}
