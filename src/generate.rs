//! Top-level entry points.
//!
//! [`parse_str`] and [`parse_file`] stop at the [`FieldSet`]; [`generate`]
//! additionally layers the baseline defaults underneath and writes the field
//! files. Compiling the LaTeX template is left to the caller.

use crate::config::{GenerateConfig, ParserConfig};
use crate::error::LetterError;
use crate::fields::{merge_defaults, FieldSet};
use crate::pipeline::input::{self, Document};
use crate::pipeline::parse;
use crate::pipeline::write::{self, WriteStats};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Result of a [`generate`] run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    /// Final fields, defaults included.
    pub fields: FieldSet,
    /// Number of fields defined by the letter itself.
    pub parsed_fields: usize,
    /// Number of fields that came only from the defaults.
    pub defaulted_fields: usize,
    /// `None` when `dry_run` was set.
    pub write: Option<WriteStats>,
    pub duration_ms: u64,
}

/// Parse letter context text held in memory.
///
/// # Example
/// ```rust
/// use letter_context::{parse_str, ParserConfig};
///
/// let fields = parse_str("Recipient:-Dr Who\n~-\nHello\n-~\n", &ParserConfig::default()).unwrap();
/// assert_eq!(fields.get("Recipient"), Some("Dr Who"));
/// assert_eq!(fields.get("Content"), Some("Hello"));
/// ```
pub fn parse_str(text: &str, config: &ParserConfig) -> Result<FieldSet, LetterError> {
    parse::parse_document(&Document::from_text(text), config)
}

/// Read and parse a letter context file.
///
/// # Errors
/// I/O failures map to [`LetterError::FileNotFound`],
/// [`LetterError::PermissionDenied`] or [`LetterError::ReadFailed`]; document
/// problems to the errors of [`crate::DocumentParser::parse`].
pub fn parse_file(path: impl AsRef<Path>, config: &ParserConfig) -> Result<FieldSet, LetterError> {
    let path = path.as_ref();
    let document = input::read_document(path)?;
    let fields = parse::parse_document(&document, config)?;
    info!("Parsed {} fields from {}", fields.len(), path.display());
    Ok(fields)
}

/// Parse a letter context file, merge defaults, and write the field files.
pub fn generate(
    path: impl AsRef<Path>,
    config: &GenerateConfig,
) -> Result<GenerateOutput, LetterError> {
    let start = Instant::now();
    let parsed = parse_file(path, &config.parser)?;
    let parsed_fields = parsed.len();

    let fields = if config.apply_defaults {
        for (name, _) in config.defaults.iter() {
            if parsed.contains(name) {
                debug!("Letter overrides default for '{}'", name);
            }
        }
        merge_defaults(&config.defaults, parsed)
    } else {
        parsed
    };
    let defaulted_fields = fields.len() - parsed_fields;

    let write = if config.dry_run {
        debug!("dry_run set; not writing field files");
        None
    } else {
        Some(write::write_fields(
            &fields,
            &config.output_dir,
            &config.extension,
        )?)
    };

    Ok(GenerateOutput {
        fields,
        parsed_fields,
        defaulted_fields,
        write,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str() {
        let fields = parse_str("A:-1\n~-\nbody\n-~\n", &ParserConfig::default()).unwrap();
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_parse_file_not_found() {
        let err = parse_file("/no/such/letter.letter", &ParserConfig::default()).unwrap_err();
        assert!(matches!(err, LetterError::FileNotFound { .. }));
    }

    #[test]
    fn test_generate_counts_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let letter = dir.path().join("acme.letter");
        std::fs::write(&letter, "Recipient:-Ms Lee\n~-\nHi\n-~\n").unwrap();

        let config = GenerateConfig::builder()
            .output_dir(dir.path().join("config"))
            .build()
            .unwrap();
        let out = generate(&letter, &config).unwrap();

        assert_eq!(out.parsed_fields, 2);
        assert_eq!(out.defaulted_fields, 2);
        assert_eq!(out.fields.get("Recipient"), Some("Ms Lee"));
        assert_eq!(out.fields.get("Closing"), Some("Warm Regards"));
        assert_eq!(out.write.as_ref().map(|w| w.files_written), Some(4));
    }

    #[test]
    fn test_generate_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let letter = dir.path().join("a.letter");
        std::fs::write(&letter, "~-\nHi\n-~\n").unwrap();

        let config = GenerateConfig::builder()
            .output_dir(dir.path().join("config"))
            .dry_run(true)
            .apply_defaults(false)
            .build()
            .unwrap();
        let out = generate(&letter, &config).unwrap();

        assert!(out.write.is_none());
        assert_eq!(out.fields.len(), 1);
        assert_eq!(out.defaulted_fields, 0);
        assert!(!dir.path().join("config").exists());
    }
}
