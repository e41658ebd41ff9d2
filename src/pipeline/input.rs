//! Input resolution: turn a path or an in-memory string into a [`Document`].
//!
//! The whole file is read up front. Letter context files are small, and the
//! parser needs one line of lookahead inside blocks, which is simplest over
//! a materialised `Vec` of lines.

use crate::error::LetterError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An ordered, immutable sequence of lines.
///
/// Each line keeps its terminator (`\n` or `\r\n`) except possibly the last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split `text` into lines, keeping terminators.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Build a document from lines with or without their terminators.
    ///
    /// Every line but the last is given a `\n` if it lacks one, so
    /// `from_lines(text.lines())` reads the same as `from_text(text)`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let last = lines.len().saturating_sub(1);
        for line in &mut lines[..last] {
            if !line.ends_with('\n') {
                line.push('\n');
            }
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Strip a trailing `\n` or `\r\n`.
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// A line with nothing but its terminator.
pub fn is_blank(line: &str) -> bool {
    strip_terminator(line).is_empty()
}

/// Read a letter context file into a [`Document`].
pub fn read_document(path: impl AsRef<Path>) -> Result<Document, LetterError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| map_read_error(path, e))?;
    let document = Document::from_text(&text);
    debug!(
        "Read {} lines from letter context: {}",
        document.len(),
        path.display()
    );
    Ok(document)
}

fn map_read_error(path: &Path, e: std::io::Error) -> LetterError {
    let path = PathBuf::from(path);
    match e.kind() {
        ErrorKind::NotFound => LetterError::FileNotFound { path },
        ErrorKind::PermissionDenied => LetterError::PermissionDenied { path },
        _ => LetterError::ReadFailed { path, source: e },
    }
}
