// crates/translate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Translate Interfaces
// Description: Backend-agnostic storage interface for language catalogs.
// Purpose: Define the contract the translation manager persists through.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The translation manager never touches the filesystem directly. It reads
//! and writes whole catalogs through a [`LanguageStore`], which lets the same
//! logic run against a directory of JSON files or an in-memory map.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::LanguageMap;
use crate::core::LanguageName;
use crate::files::FileError;

// ============================================================================
// SECTION: Language Store
// ============================================================================

/// Language store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("language store io error: {0}")]
    Io(String),
    /// Stored catalog could not be decoded.
    #[error("language store corruption in {language}: {message}")]
    Corrupt {
        /// Language whose catalog is corrupt.
        language: String,
        /// Decoder message.
        message: String,
    },
    /// Store input or configuration is invalid.
    #[error("language store invalid data: {0}")]
    Invalid(String),
    /// Store reported an error.
    #[error("language store error: {0}")]
    Store(String),
}

impl From<FileError> for StoreError {
    fn from(err: FileError) -> Self {
        match err {
            FileError::Io(message) => Self::Io(message),
            FileError::TooLarge {
                ..
            } => Self::Invalid(err.to_string()),
            FileError::Parse(message) | FileError::Serialize(message) => Self::Store(message),
        }
    }
}

/// Persistent storage for whole language catalogs.
pub trait LanguageStore: Send + Sync {
    /// Lists the languages currently held by the store, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be enumerated.
    fn list(&self) -> Result<Vec<LanguageName>, StoreError>;

    /// Loads a catalog, returning `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails.
    fn load(&self, language: &LanguageName) -> Result<Option<LanguageMap>, StoreError>;

    /// Saves a catalog, replacing any previous version.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when saving fails.
    fn save(&self, language: &LanguageName, catalog: &LanguageMap) -> Result<(), StoreError>;

    /// Removes a catalog, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when removal fails.
    fn remove(&self, language: &LanguageName) -> Result<bool, StoreError>;
}
