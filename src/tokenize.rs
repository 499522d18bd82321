/// Lower-cases `text` and splits it on runs of whitespace.
///
/// Punctuation is kept attached to its word. Empty tokens are never
/// produced, so leading or trailing whitespace does not inflate the count.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|token| token.to_string())
        .collect()
}

/// Every contiguous window of `n` tokens, joined with a single space.
///
/// Windows are returned in order and repeated windows are kept. An `n` of
/// zero or larger than `tokens.len()` yields no windows.
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<String> {
    if n == 0 || n > tokens.len() {
        return Vec::new();
    }
    tokens.windows(n).map(join_window).collect()
}

/// Joins one window of tokens into a phrase.
pub(crate) fn join_window<S: AsRef<str>>(window: &[S]) -> String {
    window
        .iter()
        .map(|token| token.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}
