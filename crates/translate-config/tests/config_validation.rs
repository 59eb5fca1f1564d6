// crates/translate-config/tests/config_validation.rs
// ============================================================================
// Module: Config Loading and Validation Tests
// Description: Validate defaults, file loading, and field invariants.
// Purpose: Ensure translate.toml is parsed strictly and fails closed.
// Dependencies: translate-config, translate-core, tempfile
// ============================================================================

//! ## Overview
//! Exercises `TranslateConfig` parsing and validation. Every invalid input
//! must surface a `ConfigError` naming the offending field.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tempfile::TempDir;
use translate_config::AuditSinkKind;
use translate_config::ConfigError;
use translate_config::TranslateConfig;
use translate_core::JsonFormat;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Result type for tests that report failures as messages.
type TestResult = Result<(), String>;

/// Asserts that `result` is an error whose message contains `needle`.
fn assert_invalid(result: Result<TranslateConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn empty_config_uses_defaults() -> TestResult {
    let config = TranslateConfig::from_toml("").map_err(|err| err.to_string())?;
    if config.store.lang_dir != PathBuf::from("./lang") {
        return Err("store.lang_dir should default to ./lang".to_string());
    }
    if config.store.extension != "json" || config.store.format != JsonFormat::Compact {
        return Err("store defaults should be json + compact".to_string());
    }
    if config.audit.sink != AuditSinkKind::None {
        return Err("audit.sink should default to none".to_string());
    }
    let fallback = config.fallback_language().map_err(|err| err.to_string())?;
    if fallback.as_str() != "en" {
        return Err("lookup.fallback_language should default to en".to_string());
    }
    Ok(())
}

#[test]
fn full_config_parses() -> TestResult {
    let config = TranslateConfig::from_toml(
        r#"
[store]
lang_dir = "resources/lang"
extension = "lang"
max_file_bytes = 2048
format = "pretty"

[audit]
sink = "stderr"

[lookup]
fallback_language = "fr"
"#,
    )
    .map_err(|err| err.to_string())?;
    let store = config.json_store_config(None);
    if store.root != Path::new("resources/lang") || store.extension != "lang" {
        return Err("store settings not carried into the store config".to_string());
    }
    if store.max_file_bytes != 2048 || store.format != JsonFormat::Pretty {
        return Err("store limits not carried into the store config".to_string());
    }
    let overridden = config.json_store_config(Some(Path::new("/tmp/override")));
    if overridden.root != Path::new("/tmp/override") {
        return Err("lang_dir override ignored".to_string());
    }
    Ok(())
}

#[test]
fn unknown_fields_are_rejected() -> TestResult {
    assert_invalid(TranslateConfig::from_toml("[store]\nlang_directory = \"x\"\n"), "parse")
}

#[test]
fn extension_with_dot_is_rejected() -> TestResult {
    assert_invalid(TranslateConfig::from_toml("[store]\nextension = \".json\"\n"), "store.extension")
}

#[test]
fn zero_size_limit_is_rejected() -> TestResult {
    assert_invalid(
        TranslateConfig::from_toml("[store]\nmax_file_bytes = 0\n"),
        "store.max_file_bytes",
    )
}

#[test]
fn file_sink_requires_path() -> TestResult {
    assert_invalid(TranslateConfig::from_toml("[audit]\nsink = \"file\"\n"), "audit.path")
}

#[test]
fn audit_path_requires_file_sink() -> TestResult {
    assert_invalid(
        TranslateConfig::from_toml("[audit]\nsink = \"stderr\"\npath = \"audit.log\"\n"),
        "audit.path requires",
    )
}

#[test]
fn invalid_fallback_language_is_rejected() -> TestResult {
    assert_invalid(
        TranslateConfig::from_toml("[lookup]\nfallback_language = \"../en\"\n"),
        "lookup.fallback_language",
    )
}

#[test]
fn load_reads_explicit_file() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let path = dir.path().join("translate.toml");
    let log = dir.path().join("audit.log");
    let body = format!(
        "[store]\nlang_dir = \"catalogs\"\n\n[audit]\nsink = \"file\"\npath = '{}'\n",
        log.display()
    );
    fs::write(&path, body).map_err(|err| err.to_string())?;
    let config = TranslateConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if config.source_path.as_deref() != Some(path.as_path()) {
        return Err("source_path should record the loaded file".to_string());
    }
    if config.store.lang_dir != Path::new("catalogs") {
        return Err("store.lang_dir not loaded".to_string());
    }
    config.audit_sink().map_err(|err| err.to_string())?;
    if !log.exists() {
        return Err("file audit sink should create its log file".to_string());
    }
    Ok(())
}

#[test]
fn load_missing_explicit_file_fails() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let missing = dir.path().join("absent.toml");
    assert_invalid(TranslateConfig::load(Some(&missing)), "config io error")
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let path = dir.path().join("translate.toml");
    let padding = "#".repeat(1024 * 1024 + 1);
    fs::write(&path, padding).map_err(|err| err.to_string())?;
    assert_invalid(TranslateConfig::load(Some(&path)), "size limit")
}
