use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Where one side of a comparison comes from. Only one source is active.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InputSource {
    File(PathBuf),
    Text(String),
}

impl InputSource {
    /// Picks the active source from the two mutually exclusive arguments.
    /// A file wins over inline text.
    pub fn from_args(file: Option<PathBuf>, text: Option<String>) -> Option<Self> {
        match (file, text) {
            (Some(path), _) => Some(InputSource::File(path)),
            (None, Some(text)) => Some(InputSource::Text(text)),
            (None, None) => None,
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::File(path) => read_text(path),
            InputSource::Text(text) => Ok(text.clone()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Text(_) => "<inline>".to_string(),
        }
    }
}

/// Reads a summary file, replacing byte sequences that are not valid UTF-8
/// with U+FFFD.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read summary file {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
