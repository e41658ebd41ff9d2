//! Pipeline stages for turning a letter context file into field files.
//!
//! Each submodule implements exactly one step and is independently testable.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ parse ──▶ format ──▶ write
//! (lines)   (fields)  (Content)  (<Name>.tex)
//! ```
//!
//! 1. [`input`]  — read the file into an ordered list of lines
//! 2. [`parse`]  — walk the lines once, splitting fields on the two delimiter
//!    syntaxes and assembling block bodies
//! 3. [`format`] — rewrite `Link(...)` and bare email addresses in the
//!    content field into LaTeX hyperlinks
//! 4. [`write`]  — write one file per field for the LaTeX template to `\input`

pub mod format;
pub mod input;
pub mod parse;
pub mod write;
