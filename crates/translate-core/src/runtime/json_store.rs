// crates/translate-core/src/runtime/json_store.rs
// ============================================================================
// Module: Translate JSON Directory Store
// Description: Language store backed by one JSON file per language.
// Purpose: Persist catalogs as `<root>/<language>.<extension>` files.
// Dependencies: crate::{core, files, interfaces}
// ============================================================================

//! ## Overview
//! [`JsonDirectoryStore`] maps each language to a single JSON object file in
//! a catalog directory (by default `./lang/<language>.json`). The directory
//! does not need to exist until the first save.
//!
//! ## Invariants
//! - Catalog paths always stay directly inside the store root.
//! - A catalog file containing `null` loads as an empty catalog.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use crate::core::LanguageMap;
use crate::core::LanguageName;
use crate::files::FileError;
use crate::files::JsonFormat;
use crate::files::folder_file_names;
use crate::files::read_json_file;
use crate::files::remove_file;
use crate::files::write_json_file;
use crate::interfaces::LanguageStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default catalog directory.
pub const DEFAULT_LANG_DIR: &str = "./lang";
/// Default catalog file extension.
pub const DEFAULT_EXTENSION: &str = "json";
/// Default maximum catalog file size in bytes.
pub const DEFAULT_MAX_FILE_BYTES: usize = 4 * 1024 * 1024;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Settings for a [`JsonDirectoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStoreConfig {
    /// Directory holding the catalog files.
    pub root: PathBuf,
    /// Catalog file extension without the leading dot.
    pub extension: String,
    /// Maximum catalog file size accepted on load.
    pub max_file_bytes: usize,
    /// Layout used when writing catalogs.
    pub format: JsonFormat,
}

impl Default for JsonStoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_LANG_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            format: JsonFormat::Compact,
        }
    }
}

// ============================================================================
// SECTION: Store
// ============================================================================

/// Language store keeping one JSON file per language.
#[derive(Debug, Clone)]
pub struct JsonDirectoryStore {
    /// Store settings.
    config: JsonStoreConfig,
}

impl JsonDirectoryStore {
    /// Creates a store after validating its settings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] when the root path or extension is unusable.
    pub fn new(config: JsonStoreConfig) -> Result<Self, StoreError> {
        validate_path(&config.root)?;
        let extension = config.extension.as_str();
        if extension.is_empty() || extension.contains(['.', '/', '\\']) {
            return Err(StoreError::Invalid(format!("invalid catalog extension '{extension}'")));
        }
        if config.max_file_bytes == 0 {
            return Err(StoreError::Invalid("max_file_bytes must be greater than zero".to_string()));
        }
        Ok(Self {
            config,
        })
    }

    /// Returns the catalog directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Returns the file path used for `language`.
    #[must_use]
    pub fn catalog_path(&self, language: &LanguageName) -> PathBuf {
        self.config.root.join(format!("{}.{}", language.as_str(), self.config.extension))
    }

    /// Maps a file error for `language` onto a store error.
    fn map_error(language: &LanguageName, err: FileError) -> StoreError {
        match err {
            FileError::Parse(message) => StoreError::Corrupt {
                language: language.to_string(),
                message,
            },
            other => other.into(),
        }
    }
}

impl LanguageStore for JsonDirectoryStore {
    /// Lists catalog files whose stem is already a canonical language name.
    ///
    /// Stems that parsing would alter (surrounding whitespace) are skipped so
    /// every listed language loads from the file it was listed from.
    fn list(&self) -> Result<Vec<LanguageName>, StoreError> {
        let names = folder_file_names(&self.config.root, Some(&self.config.extension));
        Ok(names
            .iter()
            .filter_map(|name| {
                LanguageName::parse(name).ok().filter(|parsed| parsed.as_str() == name.as_str())
            })
            .collect())
    }

    fn load(&self, language: &LanguageName) -> Result<Option<LanguageMap>, StoreError> {
        let path = self.catalog_path(language);
        let catalog: Option<Option<LanguageMap>> = read_json_file(&path, self.config.max_file_bytes)
            .map_err(|err| Self::map_error(language, err))?;
        Ok(catalog.map(Option::unwrap_or_default))
    }

    fn save(&self, language: &LanguageName, catalog: &LanguageMap) -> Result<(), StoreError> {
        let path = self.catalog_path(language);
        validate_path(&path)?;
        write_json_file(&path, catalog, self.config.format)
            .map_err(|err| Self::map_error(language, err))
    }

    fn remove(&self, language: &LanguageName) -> Result<bool, StoreError> {
        remove_file(&self.catalog_path(language)).map_err(|err| Self::map_error(language, err))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates a store path against length limits.
fn validate_path(path: &Path) -> Result<(), StoreError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(StoreError::Invalid("catalog path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(StoreError::Invalid("catalog path component too long".to_string()));
        }
    }
    Ok(())
}
