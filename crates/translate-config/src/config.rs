// crates/translate-config/src/config.rs
// ============================================================================
// Module: Translate Configuration
// Description: Configuration loading and validation for Translate.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: translate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Invalid configuration fails closed. When no path is given and the default
//! `translate.toml` does not exist, built-in defaults are used.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use translate_core::FileAuditSink;
use translate_core::JsonFormat;
use translate_core::JsonStoreConfig;
use translate_core::LanguageName;
use translate_core::NoopAuditSink;
use translate_core::StderrAuditSink;
use translate_core::TranslationAuditSink;
use translate_core::runtime::json_store::DEFAULT_EXTENSION;
use translate_core::runtime::json_store::DEFAULT_LANG_DIR;
use translate_core::runtime::json_store::DEFAULT_MAX_FILE_BYTES;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "translate.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "TRANSLATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Upper bound for `store.max_file_bytes`.
pub const MAX_CATALOG_FILE_BYTES: usize = 64 * 1024 * 1024;
/// Default fallback language for lookups.
const DEFAULT_FALLBACK_LANGUAGE: &str = "en";

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Top-level Translate configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslateConfig {
    /// Catalog store configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Audit logging configuration.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Lookup configuration.
    #[serde(default)]
    pub lookup: LookupConfig,
    /// Path the configuration was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl TranslateConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// An explicit `path` or `TRANSLATE_CONFIG` must point at an existing
    /// file. The implicit `translate.toml` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, required) = resolve_path(path, env::var(CONFIG_ENV_VAR).ok())?;
        validate_path(&resolved)?;
        let bytes = match fs::read(&resolved) {
            Ok(bytes) => bytes,
            Err(err) if !required && err.kind() == io::ErrorKind::NotFound => {
                let config = Self::default();
                config.validate()?;
                return Ok(config);
            }
            Err(err) => return Err(ConfigError::Io(err.to_string())),
        };
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config = Self::from_toml(content)?;
        config.source_path = Some(resolved);
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()?;
        self.audit.validate()?;
        self.lookup.validate()?;
        Ok(())
    }

    /// Returns the JSON directory store settings, optionally overriding the directory.
    #[must_use]
    pub fn json_store_config(&self, lang_dir: Option<&Path>) -> JsonStoreConfig {
        JsonStoreConfig {
            root: lang_dir.map_or_else(|| self.store.lang_dir.clone(), Path::to_path_buf),
            extension: self.store.extension.clone(),
            max_file_bytes: self.store.max_file_bytes,
            format: self.store.format,
        }
    }

    /// Builds the configured audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the audit file cannot be opened.
    pub fn audit_sink(&self) -> Result<Arc<dyn TranslationAuditSink>, ConfigError> {
        match self.audit.sink {
            AuditSinkKind::None => Ok(Arc::new(NoopAuditSink)),
            AuditSinkKind::Stderr => Ok(Arc::new(StderrAuditSink)),
            AuditSinkKind::File => {
                let path = self.audit.path.as_deref().ok_or_else(|| {
                    ConfigError::Invalid("audit.path is required for file sink".to_string())
                })?;
                let sink =
                    FileAuditSink::new(path).map_err(|err| ConfigError::Io(err.to_string()))?;
                Ok(Arc::new(sink))
            }
        }
    }

    /// Returns the configured fallback language.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configured name is invalid.
    pub fn fallback_language(&self) -> Result<LanguageName, ConfigError> {
        self.lookup.fallback_language()
    }
}

// ============================================================================
// SECTION: Store Configuration
// ============================================================================

/// Catalog store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory holding `<language>.<extension>` catalog files.
    #[serde(default = "default_lang_dir")]
    pub lang_dir: PathBuf,
    /// Catalog file extension without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Maximum catalog file size accepted on load.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: usize,
    /// Layout used when writing catalogs.
    #[serde(default)]
    pub format: JsonFormat,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            lang_dir: default_lang_dir(),
            extension: default_extension(),
            max_file_bytes: default_max_file_bytes(),
            format: JsonFormat::default(),
        }
    }
}

impl StoreConfig {
    /// Validates store settings.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_path_string("store.lang_dir", &self.lang_dir.to_string_lossy())?;
        let extension = self.extension.trim();
        if extension.is_empty() {
            return Err(ConfigError::Invalid("store.extension must be non-empty".to_string()));
        }
        if extension != self.extension || extension.contains(['.', '/', '\\']) {
            return Err(ConfigError::Invalid(
                "store.extension must not contain dots, separators, or whitespace".to_string(),
            ));
        }
        if self.max_file_bytes == 0 || self.max_file_bytes > MAX_CATALOG_FILE_BYTES {
            return Err(ConfigError::Invalid(format!(
                "store.max_file_bytes must be between 1 and {MAX_CATALOG_FILE_BYTES}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Audit Configuration
// ============================================================================

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditSinkKind {
    /// Audit events are discarded.
    #[default]
    None,
    /// JSON lines on stderr.
    Stderr,
    /// JSON lines appended to `audit.path`.
    File,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Sink receiving audit events.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Log file for the `file` sink.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AuditConfig {
    /// Validates audit settings.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, &self.path) {
            (AuditSinkKind::File, None) => Err(ConfigError::Invalid(
                "audit.path is required when audit.sink = \"file\"".to_string(),
            )),
            (AuditSinkKind::File, Some(path)) => {
                validate_path_string("audit.path", &path.to_string_lossy())
            }
            (_, Some(_)) => {
                Err(ConfigError::Invalid("audit.path requires audit.sink = \"file\"".to_string()))
            }
            (_, None) => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Lookup Configuration
// ============================================================================

/// Lookup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupConfig {
    /// Language consulted when a translation is missing.
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            fallback_language: default_fallback_language(),
        }
    }
}

impl LookupConfig {
    /// Validates lookup settings.
    fn validate(&self) -> Result<(), ConfigError> {
        self.fallback_language().map(|_| ())
    }

    /// Parses the fallback language.
    fn fallback_language(&self) -> Result<LanguageName, ConfigError> {
        LanguageName::parse(&self.fallback_language).map_err(|err| {
            ConfigError::Invalid(format!("lookup.fallback_language is invalid: {err}"))
        })
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default catalog directory.
fn default_lang_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LANG_DIR)
}

/// Default catalog extension.
fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Default catalog size limit.
const fn default_max_file_bytes() -> usize {
    DEFAULT_MAX_FILE_BYTES
}

/// Default fallback language.
fn default_fallback_language() -> String {
    DEFAULT_FALLBACK_LANGUAGE.to_string()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
///
/// Returns the path and whether it must exist.
fn resolve_path(
    path: Option<&Path>,
    env_path: Option<String>,
) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Some(env_path) = env_path.filter(|value| !value.trim().is_empty()) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    let path = Path::new(trimmed);
    for component in path.components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
