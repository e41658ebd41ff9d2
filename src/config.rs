//! Configuration types for parsing letter context files.
//!
//! Parsing behaviour is controlled through [`ParserConfig`]; the end-to-end
//! [`crate::generate`] entry point takes a [`GenerateConfig`] that wraps a
//! `ParserConfig` together with output settings. Both are built through
//! builders that validate on `build()`, and both derive serde so a run's
//! settings can be logged or stored next to its output.

use crate::error::LetterError;
use crate::fields::{FieldSet, CONTENT_FIELD};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a single [`crate::DocumentParser`] run.
///
/// # Example
/// ```rust
/// use letter_context::{BlankLinePolicy, ParserConfig};
///
/// let config = ParserConfig::builder()
///     .single_line_delimiter("=>")
///     .blank_lines(BlankLinePolicy::Preserve)
///     .build()
///     .unwrap();
/// assert_eq!(config.delimiters.single_line, "=>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Field delimiters. Part of the file-format contract; change only for
    /// documents written against a different convention.
    pub delimiters: Delimiters,

    /// Name given to a block opened with a bare start marker. Default: `Content`.
    ///
    /// This is also the field that must be present after parsing and the
    /// only field passed through the content formatter.
    pub content_field: String,

    /// How blank lines inside a block are treated. Default: [`BlankLinePolicy::Collapse`].
    pub blank_lines: BlankLinePolicy,

    /// Markup emitted by the content formatter.
    pub markup: MarkupStyle,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiters: Delimiters::default(),
            content_field: CONTENT_FIELD.to_string(),
            blank_lines: BlankLinePolicy::default(),
            markup: MarkupStyle::default(),
        }
    }
}

impl ParserConfig {
    /// Create a new builder for `ParserConfig`.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder {
            config: Self::default(),
        }
    }

    /// Check the constraints `build()` enforces.
    ///
    /// Public so configs deserialised from elsewhere can be checked too.
    pub fn validate(&self) -> Result<(), LetterError> {
        let d = &self.delimiters;
        if d.single_line.is_empty() || d.block_start.is_empty() || d.block_end.is_empty() {
            return Err(LetterError::InvalidConfig(
                "Delimiters must not be empty".into(),
            ));
        }
        if d.block_start == d.block_end {
            return Err(LetterError::InvalidConfig(format!(
                "Block start and end markers must differ, both are {:?}",
                d.block_start
            )));
        }
        // A line is tried against the single-line delimiter first, so neither
        // may contain the other or one syntax becomes unreachable.
        for marker in [&d.block_start, &d.block_end] {
            if marker.contains(d.single_line.as_str()) || d.single_line.contains(marker.as_str()) {
                return Err(LetterError::InvalidConfig(format!(
                    "Single-line delimiter {:?} overlaps block marker {:?}",
                    d.single_line, marker
                )));
            }
        }
        if self.content_field.trim().is_empty() {
            return Err(LetterError::InvalidConfig(
                "Content field name must not be empty".into(),
            ));
        }
        if self.markup.link_color.trim().is_empty() {
            return Err(LetterError::InvalidConfig(
                "Link colour must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`ParserConfig`].
#[derive(Debug)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
}

impl ParserConfigBuilder {
    pub fn single_line_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.delimiters.single_line = delimiter.into();
        self
    }

    pub fn block_start(mut self, marker: impl Into<String>) -> Self {
        self.config.delimiters.block_start = marker.into();
        self
    }

    pub fn block_end(mut self, marker: impl Into<String>) -> Self {
        self.config.delimiters.block_end = marker.into();
        self
    }

    pub fn content_field(mut self, name: impl Into<String>) -> Self {
        self.config.content_field = name.into();
        self
    }

    pub fn blank_lines(mut self, policy: BlankLinePolicy) -> Self {
        self.config.blank_lines = policy;
        self
    }

    pub fn link_color(mut self, color: impl Into<String>) -> Self {
        self.config.markup.link_color = color.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ParserConfig, LetterError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// The two delimiter syntaxes of a letter context file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    /// Separates name and value on one line: `NAME:-VALUE`. Default: `:-`.
    pub single_line: String,
    /// Opens a multi-line block: `NAME~-`. Default: `~-`.
    pub block_start: String,
    /// Closes a multi-line block. Default: `-~`.
    pub block_end: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            single_line: ":-".to_string(),
            block_start: "~-".to_string(),
            block_end: "-~".to_string(),
        }
    }
}

/// Treatment of fully blank lines inside a multi-line block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlankLinePolicy {
    /// Drop a blank line whose next line has content; keep every other line. (default)
    #[default]
    Collapse,
    /// Keep every line of the block verbatim.
    Preserve,
}

/// Appearance of hyperlinks produced by the content formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupStyle {
    /// Colour name passed to `\textcolor`. Must be defined by the LaTeX
    /// template. Default: `Purple_200`.
    pub link_color: String,
}

impl Default for MarkupStyle {
    fn default() -> Self {
        Self {
            link_color: "Purple_200".to_string(),
        }
    }
}

// ── Generation ───────────────────────────────────────────────────────────

/// Configuration for [`crate::generate`]: parse, merge defaults, write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    pub parser: ParserConfig,

    /// Directory receiving one file per field. Default: `config`.
    pub output_dir: PathBuf,

    /// Extension of each field file, without the dot. Default: `tex`.
    pub extension: String,

    /// Fallback values for fields the letter does not define.
    /// Default: [`FieldSet::baseline`].
    pub defaults: FieldSet,

    /// Merge [`Self::defaults`] under the parsed fields. Default: true.
    pub apply_defaults: bool,

    /// Parse and merge defaults but write nothing. Default: false.
    pub dry_run: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            output_dir: PathBuf::from("config"),
            extension: "tex".to_string(),
            defaults: FieldSet::baseline(),
            apply_defaults: true,
            dry_run: false,
        }
    }
}

impl GenerateConfig {
    /// Create a new builder for `GenerateConfig`.
    pub fn builder() -> GenerateConfigBuilder {
        GenerateConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`GenerateConfig`].
#[derive(Debug)]
pub struct GenerateConfigBuilder {
    config: GenerateConfig,
}

impl GenerateConfigBuilder {
    pub fn parser(mut self, parser: ParserConfig) -> Self {
        self.config.parser = parser;
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.config.extension = ext.into();
        self
    }

    pub fn defaults(mut self, defaults: FieldSet) -> Self {
        self.config.defaults = defaults;
        self
    }

    pub fn apply_defaults(mut self, v: bool) -> Self {
        self.config.apply_defaults = v;
        self
    }

    pub fn dry_run(mut self, v: bool) -> Self {
        self.config.dry_run = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<GenerateConfig, LetterError> {
        let c = &self.config;
        c.parser.validate()?;
        let ext = c.extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '\\']) {
            return Err(LetterError::InvalidConfig(format!(
                "Invalid field file extension {:?}",
                c.extension
            )));
        }
        let mut config = self.config;
        config.extension = config.extension.trim_start_matches('.').to_string();
        Ok(config)
    }
}
