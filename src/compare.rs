use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use thiserror::Error;
use tracing::debug;

use crate::report::{ComparisonReport, SummaryKind};
use crate::tokenize::{join_window, tokenize};

/// Errors returned by [`compare`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("missing {side} summary: provide both the actual and the generated summary")]
    MissingInput { side: SummaryKind },
}

/// Compares an actual summary against a generated one.
///
/// Both texts must be non-empty. Word counts are raw token counts, repeats
/// included; the word and phrase sets are deduplicated.
pub fn compare(actual: &str, generated: &str) -> Result<ComparisonReport, CompareError> {
    if actual.is_empty() {
        return Err(CompareError::MissingInput {
            side: SummaryKind::Actual,
        });
    }
    if generated.is_empty() {
        return Err(CompareError::MissingInput {
            side: SummaryKind::Generated,
        });
    }

    let actual_tokens = tokenize(actual);
    let generated_tokens = tokenize(generated);

    let report = ComparisonReport {
        common_words: common_words(&actual_tokens, &generated_tokens),
        common_phrases: common_phrases(&actual_tokens, &generated_tokens),
        word_count_actual: actual_tokens.len(),
        word_count_generated: generated_tokens.len(),
    };
    debug!(
        word_count_actual = report.word_count_actual,
        word_count_generated = report.word_count_generated,
        common_words = report.common_words.len(),
        common_phrases = report.common_phrases.len(),
        phrase_length = report.phrase_length(),
        "compared summaries"
    );
    Ok(report)
}

/// Tokens of `a` that also occur somewhere in `b`.
pub fn common_words<S: AsRef<str>>(a: &[S], b: &[S]) -> BTreeSet<String> {
    let present: HashSet<&str> = b.iter().map(|token| token.as_ref()).collect();
    a.iter()
        .map(|token| token.as_ref())
        .filter(|token| present.contains(token))
        .map(|token| token.to_string())
        .collect()
}

/// Shared phrases at the longest phrase length that has any match.
///
/// Lengths are scanned upward from two; each length with a match replaces
/// the previous result rather than adding to it. Shorter shared phrases are
/// therefore dropped once a longer one is found.
///
/// Windows are compared as token slices; only matching windows are joined
/// into phrase strings. Tokens never contain whitespace, so slice equality
/// and phrase equality agree.
pub fn common_phrases<S: AsRef<str> + Eq + Hash>(a: &[S], b: &[S]) -> BTreeSet<String> {
    let max_length = a.len().min(b.len());
    let mut result = BTreeSet::new();

    for n in 2..=max_length {
        let b_windows: HashSet<&[S]> = b.windows(n).collect();
        let matches: BTreeSet<String> = a
            .windows(n)
            .filter(|window| b_windows.contains(window))
            .map(join_window)
            .collect();
        // A shared (n+1)-gram always contains a shared n-gram.
        if matches.is_empty() {
            break;
        }
        result = matches;
    }

    result
}
