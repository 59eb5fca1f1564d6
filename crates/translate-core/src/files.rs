// crates/translate-core/src/files.rs
// ============================================================================
// Module: Translate JSON File Helpers
// Description: Bounded JSON file reads, JSON writes, and catalog folder listing.
// Purpose: Keep all raw filesystem access for catalogs in one place.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! These helpers back the JSON directory store. Reads are size-limited and a
//! missing file is reported as `Ok(None)` rather than an error. Writes create
//! any missing parent directories and replace the previous file content.
//!
//! ## Invariants
//! - [`folder_file_names`] never fails; unreadable folders yield an empty list.
//! - Listed names are sorted and have their last extension removed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Output layout used when writing JSON files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonFormat {
    /// Single-line JSON without whitespace.
    #[default]
    Compact,
    /// Indented JSON with a trailing newline.
    Pretty,
}

/// JSON file access errors.
#[derive(Debug, Error)]
pub enum FileError {
    /// I/O failure while reading or writing.
    #[error("file io error: {0}")]
    Io(String),
    /// File exceeds the configured read limit.
    #[error("file is {size} bytes (limit {limit})")]
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
    /// File content is not valid UTF-8 JSON of the expected shape.
    #[error("file parse error: {0}")]
    Parse(String),
    /// Value could not be serialized.
    #[error("file serialize error: {0}")]
    Serialize(String),
}

// ============================================================================
// SECTION: Reading
// ============================================================================

/// Reads and deserializes a JSON file.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns [`FileError`] when the file cannot be read, exceeds `max_bytes`, or
/// does not contain JSON matching `T`.
pub fn read_json_file<T: DeserializeOwned>(
    path: &Path,
    max_bytes: usize,
) -> Result<Option<T>, FileError> {
    let bytes = match read_bytes_with_limit(path, max_bytes) {
        Ok(bytes) => bytes,
        Err(FileError::Io(_)) if !path.exists() => return Ok(None),
        Err(err) => return Err(err),
    };
    let content = std::str::from_utf8(&bytes)
        .map_err(|_| FileError::Parse("file must be utf-8".to_string()))?;
    serde_json::from_str(content).map(Some).map_err(|err| FileError::Parse(err.to_string()))
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, FileError> {
    let file = File::open(path).map_err(|err| FileError::Io(err.to_string()))?;
    let size = file.metadata().map_err(|err| FileError::Io(err.to_string()))?.len();
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX);
    if size > limit {
        return Err(FileError::TooLarge {
            size,
            limit: max_bytes,
        });
    }
    let mut bytes = Vec::new();
    file.take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|err| FileError::Io(err.to_string()))?;
    if bytes.len() > max_bytes {
        return Err(FileError::TooLarge {
            size: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Writing
// ============================================================================

/// Serializes `value` and writes it to `path`, replacing any previous content.
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns [`FileError`] when serialization or any filesystem step fails.
pub fn write_json_file<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    format: JsonFormat,
) -> Result<(), FileError> {
    let bytes = match format {
        JsonFormat::Compact => serde_json::to_vec(value),
        JsonFormat::Pretty => serde_json::to_vec_pretty(value).map(|mut bytes| {
            bytes.push(b'\n');
            bytes
        }),
    }
    .map_err(|err| FileError::Serialize(err.to_string()))?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| FileError::Io(err.to_string()))?;
    }
    fs::write(path, bytes).map_err(|err| FileError::Io(err.to_string()))
}

/// Deletes a file, returning whether it existed.
///
/// # Errors
///
/// Returns [`FileError::Io`] when the file exists but cannot be removed.
pub fn remove_file(path: &Path) -> Result<bool, FileError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(FileError::Io(err.to_string())),
    }
}

// ============================================================================
// SECTION: Listing
// ============================================================================

/// Lists the regular files in `folder`, without their extension.
///
/// With `Some(extension)` only files named `*.<extension>` are listed; `None`
/// or an empty extension lists every file. A name loses the text after its
/// last `.` unless that dot is the first character (`.json` stays `.json`).
#[must_use]
pub fn folder_file_names(folder: &Path, extension: Option<&str>) -> Vec<String> {
    let Ok(entries) = fs::read_dir(folder) else {
        return Vec::new();
    };
    let suffix = extension.filter(|extension| !extension.is_empty()).map(|ext| format!(".{ext}"));
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| suffix.as_deref().is_none_or(|suffix| name.ends_with(suffix)))
        .map(|name| strip_extension(&name).to_string())
        .collect();
    names.sort();
    names
}

/// Removes the text from the last `.` onward when the dot is not leading.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) if index > 0 => &name[.. index],
        _ => name,
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
