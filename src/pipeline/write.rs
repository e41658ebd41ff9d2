//! Field-file output: one file per field, named after the field.
//!
//! The LaTeX template `\input`s `config/<Name>.tex` for each field it uses,
//! so every entry of the [`FieldSet`] becomes its own file. Each file is
//! written to a temp file in the target directory and then renamed into
//! place, so a template build never sees a half-written field.
//!
//! The directory is created if missing. Nothing is ever deleted: stale files
//! from an earlier run are left for the caller to manage.

use crate::error::LetterError;
use crate::fields::FieldSet;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Summary of a [`write_fields`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteStats {
    pub files_written: usize,
    pub bytes_written: u64,
    /// Paths of the written files, in field-name order.
    pub paths: Vec<PathBuf>,
}

/// Write every field of `fields` to `dir/<Name>.<extension>`.
pub fn write_fields(
    fields: &FieldSet,
    dir: impl AsRef<Path>,
    extension: &str,
) -> Result<WriteStats, LetterError> {
    let dir = dir.as_ref();

    // Validate every name before touching the file system.
    for (name, _) in fields.iter() {
        validate_file_stem(name)?;
    }

    std::fs::create_dir_all(dir).map_err(|e| LetterError::OutputWriteFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut stats = WriteStats::default();
    for (name, value) in fields.iter() {
        let path = field_path(dir, name, extension);
        write_atomic(&path, value.as_bytes())?;
        debug!("Wrote field '{}' → {}", name, path.display());
        stats.files_written += 1;
        stats.bytes_written += value.len() as u64;
        stats.paths.push(path);
    }

    info!(
        "Wrote {} field files ({} bytes) to {}",
        stats.files_written,
        stats.bytes_written,
        dir.display()
    );
    Ok(stats)
}

/// Path of the file holding field `name`.
pub fn field_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{name}.{extension}"))
}

/// Reject names that would escape the output directory or are unusable as
/// file names on common platforms.
fn validate_file_stem(name: &str) -> Result<(), LetterError> {
    let invalid = name.is_empty()
        || name == "."
        || name.contains("..")
        || name.contains(['/', '\\', '\0'])
        || name.chars().any(char::is_control);
    if invalid {
        return Err(LetterError::InvalidFieldName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), LetterError> {
    let write_failed = |source: std::io::Error| LetterError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_failed)?;
    tmp.write_all(bytes).map_err(write_failed)?;
    tmp.persist(path).map_err(|e| write_failed(e.error))?;
    Ok(())
}
