// crates/translate-core/src/core/identifiers.rs
// ============================================================================
// Module: Translate Identifiers
// Description: Validated names for language catalogs and translation keys.
// Purpose: Keep catalog names safe to use as file stems and keys bounded.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A [`LanguageName`] doubles as the file stem of a catalog on disk, so it is
//! validated on construction and cannot name a path outside the catalog
//! directory. A [`TranslationKey`] is an opaque, length-bounded string.
//!
//! ## Invariants
//! - Identifiers are only constructed through `parse`, including on deserialize.
//! - The string form is stable and is what gets written to disk.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum length of a language name in bytes.
pub const MAX_LANGUAGE_NAME_BYTES: usize = 128;
/// Maximum length of a translation key in bytes.
pub const MAX_TRANSLATION_KEY_BYTES: usize = 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Identifier validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The identifier was empty after trimming.
    #[error("identifier must be non-empty")]
    Empty,
    /// The identifier exceeds its length limit.
    #[error("identifier exceeds {limit} bytes")]
    TooLong {
        /// Allowed length in bytes.
        limit: usize,
    },
    /// The identifier contains a character that is not allowed.
    #[error("identifier contains invalid character '{0}'")]
    InvalidCharacter(char),
    /// The identifier is a reserved path name.
    #[error("identifier '{0}' is reserved")]
    Reserved(String),
}

// ============================================================================
// SECTION: Language Name
// ============================================================================

/// Name of a language catalog, used as the catalog file stem (`fr` for `fr.json`).
///
/// # Invariants
/// - Non-empty, at most [`MAX_LANGUAGE_NAME_BYTES`] bytes, no surrounding whitespace.
/// - Contains no path separators or NUL and does not start with `.`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageName(String);

impl LanguageName {
    /// Parses and validates a language name.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the name is empty, too long, or could
    /// escape the catalog directory.
    pub fn parse(value: &str) -> Result<Self, IdentifierError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if value.len() > MAX_LANGUAGE_NAME_BYTES {
            return Err(IdentifierError::TooLong {
                limit: MAX_LANGUAGE_NAME_BYTES,
            });
        }
        if let Some(ch) = value.chars().find(|ch| matches!(ch, '/' | '\\' | '\0')) {
            return Err(IdentifierError::InvalidCharacter(ch));
        }
        if value.starts_with('.') {
            return Err(IdentifierError::Reserved(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for LanguageName {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LanguageName> for String {
    fn from(value: LanguageName) -> Self {
        value.0
    }
}

// ============================================================================
// SECTION: Translation Key
// ============================================================================

/// Key of a single entry inside a language catalog.
///
/// # Invariants
/// - Non-empty and at most [`MAX_TRANSLATION_KEY_BYTES`] bytes. Whitespace is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TranslationKey(String);

impl TranslationKey {
    /// Parses and validates a translation key.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the key is empty or too long.
    pub fn parse(value: &str) -> Result<Self, IdentifierError> {
        if value.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if value.len() > MAX_TRANSLATION_KEY_BYTES {
            return Err(IdentifierError::TooLong {
                limit: MAX_TRANSLATION_KEY_BYTES,
            });
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for TranslationKey {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TranslationKey> for String {
    fn from(value: TranslationKey) -> Self {
        value.0
    }
}
