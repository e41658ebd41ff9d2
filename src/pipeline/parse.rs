//! The line-oriented letter context parser.
//!
//! A letter context file is a sequence of field declarations:
//!
//! ```text
//! Company:-Acme Pty Ltd
//! Role:-Platform Engineer
//!
//! Opening~-
//! Dear hiring team,
//! -~
//!
//! ~-
//! I am writing to apply for Link(the role, https://acme.example/jobs/42).
//! Reach me at jane@example.com.
//! -~
//! ```
//!
//! Single-line fields are `NAME:-VALUE`. A line containing `NAME~-` opens a
//! block that runs until a line containing `-~`; a bare `~-` opens the
//! content block. Blank lines between declarations are ignored and anything
//! else is an error.

use crate::config::{BlankLinePolicy, ParserConfig};
use crate::error::LetterError;
use crate::fields::{normalize_name, FieldSet};
use crate::pipeline::format::ContentFormatter;
use crate::pipeline::input::{is_blank, strip_terminator, Document};
use tracing::{debug, trace};

/// Walks a [`Document`] once and produces a [`FieldSet`].
///
/// The cursor is an index into the document's lines; block bodies look one
/// line ahead by index, never backwards.
#[derive(Debug)]
pub struct DocumentParser<'a> {
    document: &'a Document,
    config: &'a ParserConfig,
    cursor: usize,
}

impl<'a> DocumentParser<'a> {
    pub fn new(document: &'a Document, config: &'a ParserConfig) -> Self {
        Self {
            document,
            config,
            cursor: 0,
        }
    }

    /// Parse the whole document.
    ///
    /// # Errors
    /// - [`LetterError::Parse`] for a line matching no syntax
    /// - [`LetterError::UnterminatedBlock`] when input ends inside a block
    /// - [`LetterError::MissingField`] when no content field was defined
    pub fn parse(mut self) -> Result<FieldSet, LetterError> {
        let config = self.config;
        let delimiters = &config.delimiters;
        let mut fields = FieldSet::new();

        while let Some(line) = self.next_line() {
            let line_number = self.cursor;

            if let Some((name, value)) = line.split_once(delimiters.single_line.as_str()) {
                debug!("Line {}: single-line field '{}'", line_number, name.trim());
                fields.insert(name, value);
            } else if let Some((prefix, _)) = line.split_once(delimiters.block_start.as_str()) {
                let name = match prefix.trim() {
                    "" => config.content_field.as_str(),
                    name => name,
                };
                let body = self.read_block(name, line_number)?;
                debug!(
                    "Line {}: block '{}' ({} bytes)",
                    line_number,
                    name,
                    body.len()
                );
                fields.insert(name, &body);
            } else if is_blank(line) {
                trace!("Line {}: blank", line_number);
            } else {
                return Err(LetterError::Parse {
                    line_number,
                    line: strip_terminator(line).to_string(),
                });
            }
        }

        let content_field = normalize_name(&config.content_field);
        let content = fields
            .get(&content_field)
            .ok_or_else(|| LetterError::MissingField {
                field: content_field.clone(),
            })?;
        let formatted = ContentFormatter::new(&config.markup).format(content);
        fields.replace(&content_field, formatted);

        Ok(fields)
    }

    /// Advance the cursor, returning the line it moved past.
    fn next_line(&mut self) -> Option<&'a str> {
        let document = self.document;
        let line = document.lines().get(self.cursor)?;
        self.cursor += 1;
        Some(line.as_str())
    }

    fn peek_line(&self) -> Option<&'a str> {
        let document = self.document;
        document.lines().get(self.cursor).map(String::as_str)
    }

    /// Consume a block body up to and including its end marker.
    ///
    /// `opened_at` is the 1-based line number of the start marker, used when
    /// the input runs out first.
    fn read_block(&mut self, name: &str, opened_at: usize) -> Result<String, LetterError> {
        let config = self.config;
        let end = config.delimiters.block_end.as_str();
        let mut body = String::new();

        while let Some(line) = self.next_line() {
            if line.contains(end) {
                return Ok(body);
            }
            if config.blank_lines == BlankLinePolicy::Collapse && is_blank(line) {
                let next_has_text = self
                    .peek_line()
                    .is_some_and(|next| !is_blank(next) && !next.contains(end));
                if next_has_text {
                    trace!("Line {}: collapsed blank line in '{}'", self.cursor, name);
                    continue;
                }
            }
            body.push_str(line);
        }

        Err(LetterError::UnterminatedBlock {
            field: normalize_name(name),
            line_number: opened_at,
        })
    }
}

/// Parse an in-memory document with `config`.
pub fn parse_document(document: &Document, config: &ParserConfig) -> Result<FieldSet, LetterError> {
    DocumentParser::new(document, config).parse()
}
