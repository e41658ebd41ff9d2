//! # letter-context
//!
//! Parse "letter context" files into named fields for a LaTeX cover-letter
//! template.
//!
//! ## Why this crate?
//!
//! A cover letter is mostly the same document every time: the template, the
//! signature and the layout do not change, while the recipient, the company,
//! and the body do. Keeping the changing parts in a small plain-text file
//! and writing each one out as its own `.tex` snippet lets the template stay
//! untouched between applications.
//!
//! ## File format
//!
//! ```text
//! Recipient:-Ms Jane Lee
//! Company:-Acme Pty Ltd
//!
//! ~-
//! I am writing to apply for Link(the platform role, https://acme.example/jobs/42).
//!
//! You can reach me at me@example.com.
//! -~
//! ```
//!
//! * `NAME:-VALUE` defines a single-line field.
//! * `NAME~-` opens a multi-line block closed by a line containing `-~`; a
//!   bare `~-` opens the `Content` block.
//! * Blank lines between fields are ignored; any other line is an error.
//! * Inside `Content`, `Link(text, url)` and bare email addresses become
//!   coloured, underlined `\href` hyperlinks.
//!
//! ## Pipeline Overview
//!
//! ```text
//! letter file
//!  │
//!  ├─ 1. Input   read the file into lines
//!  ├─ 2. Parse   single-line fields and blocks → FieldSet
//!  ├─ 3. Format  Link(...) and emails in Content → \href markup
//!  ├─ 4. Merge   baseline defaults underneath the parsed fields
//!  └─ 5. Write   one <Name>.tex file per field
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use letter_context::{parse_str, ParserConfig};
//!
//! let text = "Company:-Acme\n~-\nMail me at jo@example.com\n-~\n";
//! let fields = parse_str(text, &ParserConfig::default()).unwrap();
//! assert_eq!(fields.get("Company"), Some("Acme"));
//! assert!(fields.get("Content").unwrap().contains(r"\href{mailto:jo@example.com}"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `letter` binary (clap + anyhow + tracing-subscriber + serde_json) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod fields;
pub mod generate;
pub mod markup;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{
    BlankLinePolicy, Delimiters, GenerateConfig, GenerateConfigBuilder, MarkupStyle, ParserConfig,
    ParserConfigBuilder,
};
pub use error::LetterError;
pub use fields::{merge_defaults, normalize_name, FieldSet, CONTENT_FIELD};
pub use generate::{generate, parse_file, parse_str, GenerateOutput};
pub use pipeline::format::{format_content, ContentFormatter};
pub use pipeline::input::Document;
pub use pipeline::parse::{parse_document, DocumentParser};
pub use pipeline::write::{write_fields, WriteStats};
