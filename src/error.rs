//! Error types for the letter-context library.
//!
//! Every failure is fatal: a letter context file either parses completely or
//! not at all, so there is a single [`LetterError`] enum rather than a
//! fatal/non-fatal split. Content formatting never fails and has no variant
//! here.
//!
//! Variants are grouped by the stage that raises them (input, document,
//! output, config) so the CLI can print a message that points the user at the
//! right place to look.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the letter-context library.
#[derive(Debug, Error)]
pub enum LetterError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Letter context file was not found at the given path.
    #[error("Letter context file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but could not be read as UTF-8 text.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Document errors ───────────────────────────────────────────────────
    /// A line matched none of the recognised syntaxes.
    #[error(
        "Invalid line {line_number}: {line:?}\n\
Expected `NAME:-VALUE`, a `NAME~-` block opener, or a blank line."
    )]
    Parse { line_number: usize, line: String },

    /// A required field was not defined anywhere in the document.
    #[error("Missing required field '{field}'\nAdd a `{field}~-` … `-~` block to the letter.")]
    MissingField { field: String },

    /// A multi-line block was opened but the input ended before its end marker.
    #[error("Block '{field}' opened on line {line_number} is never closed")]
    UnterminatedBlock { field: String, line_number: usize },

    // ── Output errors ─────────────────────────────────────────────────────
    /// A field name cannot be used as an output file name.
    #[error("Field name {name:?} cannot be used as a file name")]
    InvalidFieldName { name: String },

    /// Could not create or write a field file.
    #[error("Failed to write field file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LetterError {
    /// True for errors caused by the content of the letter file itself,
    /// as opposed to I/O or configuration problems.
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            LetterError::Parse { .. }
                | LetterError::MissingField { .. }
                | LetterError::UnterminatedBlock { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_contains_line() {
        let e = LetterError::Parse {
            line_number: 4,
            line: "???".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("???"), "got: {msg}");
        assert!(msg.contains("line 4"), "got: {msg}");
    }

    #[test]
    fn missing_field_display() {
        let e = LetterError::MissingField {
            field: "Content".into(),
        };
        assert!(e.to_string().contains("'Content'"));
    }

    #[test]
    fn unterminated_block_display() {
        let e = LetterError::UnterminatedBlock {
            field: "Content".into(),
            line_number: 7,
        };
        let msg = e.to_string();
        assert!(msg.contains("Content"));
        assert!(msg.contains("line 7"));
    }

    #[test]
    fn document_errors_are_classified() {
        assert!(LetterError::MissingField {
            field: "Content".into()
        }
        .is_document_error());
        assert!(!LetterError::InvalidConfig("x".into()).is_document_error());
        assert!(!LetterError::FileNotFound {
            path: PathBuf::from("a.letter")
        }
        .is_document_error());
    }
}
