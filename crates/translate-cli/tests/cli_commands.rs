// crates/translate-cli/tests/cli_commands.rs
// ============================================================================
// Module: CLI Command Tests
// Description: Integration tests driving the `translate` binary.
// Purpose: Ensure each command reads and writes the language directory correctly.
// Dependencies: translate-cli binary, tempfile
// ============================================================================

//! ## Overview
//! Runs the `translate` binary against temporary language directories and
//! checks stdout, stderr, exit status, and the catalog files left on disk.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use serde_json::Value;
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Path of the compiled `translate` binary.
fn translate_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_translate"))
}

/// Runs the binary inside `root` with a clean environment for config and locale.
fn run(root: &Path, args: &[&str]) -> Output {
    Command::new(translate_bin())
        .current_dir(root)
        .env_remove("TRANSLATE_CONFIG")
        .env_remove("TRANSLATE_LANG")
        .args(args)
        .output()
        .expect("run translate")
}

/// Writes a catalog file under `root/lang`.
fn write_catalog(root: &Path, language: &str, body: &Value) {
    let dir = root.join("lang");
    fs::create_dir_all(&dir).expect("create lang dir");
    fs::write(dir.join(format!("{language}.json")), body.to_string()).expect("write catalog");
}

/// Reads a catalog file under `root/lang` as JSON.
fn read_catalog(root: &Path, language: &str) -> Value {
    let bytes = fs::read(root.join("lang").join(format!("{language}.json"))).expect("read");
    serde_json::from_slice(&bytes).expect("parse catalog")
}

/// Captures stdout as a string.
fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Captures stderr as a string.
fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Creates a workspace holding `en` and `fr` catalogs.
fn seeded_root() -> TempDir {
    let root = TempDir::new().expect("temp dir");
    write_catalog(root.path(), "en", &json!({"greeting": "Hello {name}", "farewell": "Bye"}));
    write_catalog(root.path(), "fr", &json!({"greeting": "Bonjour {name}"}));
    root
}

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Verifies `--version` prints the package version.
#[test]
fn version_flag_prints_version() {
    let root = TempDir::new().expect("temp dir");
    let output = run(root.path(), &["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

/// Verifies `list` prints one language per line in ascending order.
#[test]
fn list_prints_sorted_languages() {
    let root = seeded_root();
    let output = run(root.path(), &["list"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "en\nfr\n");
}

/// Verifies `list --format json` emits a JSON array.
#[test]
fn list_json_emits_array() {
    let root = seeded_root();
    let output = run(root.path(), &["list", "--format", "json"]);
    assert!(output.status.success());
    let value: Value = serde_json::from_str(stdout(&output).trim()).expect("json output");
    assert_eq!(value, json!(["en", "fr"]));
}

/// Verifies `list` on an empty directory reports no languages.
#[test]
fn list_reports_empty_directory() {
    let root = TempDir::new().expect("temp dir");
    let output = run(root.path(), &["list"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "No languages found.");
}

/// Verifies `show` prints entries sorted by key.
#[test]
fn show_prints_catalog_entries() {
    let root = seeded_root();
    let output = run(root.path(), &["show", "--language", "en"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "farewell = Bye\ngreeting = Hello {name}\n");
}

/// Verifies `show` fails for a language that does not exist.
#[test]
fn show_unknown_language_fails() {
    let root = seeded_root();
    let output = run(root.path(), &["show", "--language", "de"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Language not found: de"));
}

/// Verifies `get` renders placeholders from `--arg`.
#[test]
fn get_renders_placeholders() {
    let root = seeded_root();
    let output = run(root.path(), &[
        "get",
        "--language",
        "fr",
        "--key",
        "greeting",
        "--arg",
        "name=Ada",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "Bonjour Ada");
}

/// Verifies `get` uses the configured fallback language for missing keys.
#[test]
fn get_falls_back_to_english() {
    let root = seeded_root();
    let output = run(root.path(), &["get", "--language", "fr", "--key", "farewell"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Bye");
}

/// Verifies `get --no-fallback` fails for keys missing in the language.
#[test]
fn get_without_fallback_fails_on_missing_key() {
    let root = seeded_root();
    let output =
        run(root.path(), &["get", "--language", "fr", "--key", "farewell", "--no-fallback"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("No translation for 'farewell' in fr."));
}

/// Verifies `set` writes through to the catalog file.
#[test]
fn set_writes_catalog_file() {
    let root = seeded_root();
    let output =
        run(root.path(), &["set", "--language", "fr", "--key", "farewell", "--value", "Salut"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        read_catalog(root.path(), "fr"),
        json!({"farewell": "Salut", "greeting": "Bonjour {name}"})
    );
}

/// Verifies `set` creates the catalog of a new language.
#[test]
fn set_creates_new_language() {
    let root = seeded_root();
    let output =
        run(root.path(), &["set", "--language", "de", "--key", "greeting", "--value", "Hallo"]);
    assert!(output.status.success());
    assert_eq!(read_catalog(root.path(), "de"), json!({"greeting": "Hallo"}));
}

/// Verifies `set` rejects language names that escape the directory.
#[test]
fn set_rejects_path_like_language() {
    let root = seeded_root();
    let output =
        run(root.path(), &["set", "--language", "../evil", "--key", "k", "--value", "v"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid language name"));
    assert!(!root.path().join("evil.json").exists());
}

/// Verifies `set-all` writes the key into every named language.
#[test]
fn set_all_writes_each_language() {
    let root = seeded_root();
    let output = run(root.path(), &[
        "set-all",
        "--key",
        "title",
        "--entry",
        "en=Title",
        "--entry",
        "fr=Titre",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(read_catalog(root.path(), "en")["title"], json!("Title"));
    assert_eq!(read_catalog(root.path(), "fr")["title"], json!("Titre"));
}

/// Verifies `set-all` rejects malformed and duplicate entries before writing.
#[test]
fn set_all_rejects_bad_entries() {
    let root = seeded_root();
    let malformed = run(root.path(), &["set-all", "--key", "title", "--entry", "en"]);
    assert!(!malformed.status.success());
    let duplicate = run(root.path(), &[
        "set-all",
        "--key",
        "title",
        "--entry",
        "en=A",
        "--entry",
        "en=B",
    ]);
    assert!(!duplicate.status.success());
    assert!(read_catalog(root.path(), "en").get("title").is_none());
}

/// Verifies `remove` deletes a key and tolerates missing keys.
#[test]
fn remove_deletes_key() {
    let root = seeded_root();
    let output = run(root.path(), &["remove", "--language", "en", "--key", "farewell"]);
    assert!(output.status.success());
    assert_eq!(read_catalog(root.path(), "en"), json!({"greeting": "Hello {name}"}));

    let again = run(root.path(), &["remove", "--language", "en", "--key", "farewell"]);
    assert!(again.status.success());
    assert!(stdout(&again).contains("nothing removed"));
}

/// Verifies `import` replaces a catalog from a JSON file.
#[test]
fn import_replaces_catalog() {
    let root = seeded_root();
    let source = root.path().join("incoming.json");
    fs::write(&source, r#"{"a":"1","b":"2"}"#).expect("write import");
    let output = run(root.path(), &[
        "import",
        "--language",
        "fr",
        "--file",
        source.to_string_lossy().as_ref(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(read_catalog(root.path(), "fr"), json!({"a": "1", "b": "2"}));
}

/// Verifies `import` fails on malformed JSON and leaves the catalog untouched.
#[test]
fn import_rejects_malformed_file() {
    let root = seeded_root();
    let source = root.path().join("broken.json");
    fs::write(&source, "{not json").expect("write import");
    let output = run(root.path(), &[
        "import",
        "--language",
        "fr",
        "--file",
        source.to_string_lossy().as_ref(),
    ]);
    assert!(!output.status.success());
    assert_eq!(read_catalog(root.path(), "fr"), json!({"greeting": "Bonjour {name}"}));
}

/// Verifies `normalize` rewrites catalogs in the configured pretty format.
#[test]
fn normalize_rewrites_in_configured_format() {
    let root = seeded_root();
    fs::write(root.path().join("translate.toml"), "[store]\nformat = \"pretty\"\n")
        .expect("write config");
    let output = run(root.path(), &["normalize"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Rewrote 2 catalogs."));
    let raw = fs::read_to_string(root.path().join("lang").join("en.json")).expect("read en");
    assert!(raw.contains('\n'));
    assert!(raw.ends_with('\n'));
}

/// Verifies `parity` succeeds when languages share the baseline keys.
#[test]
fn parity_passes_for_matching_catalogs() {
    let root = TempDir::new().expect("temp dir");
    write_catalog(root.path(), "en", &json!({"a": "A"}));
    write_catalog(root.path(), "fr", &json!({"a": "A"}));
    let output = run(root.path(), &["parity", "--baseline", "en"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("All languages match the baseline."));
}

/// Verifies `parity` reports missing keys and exits with failure.
#[test]
fn parity_reports_missing_keys() {
    let root = seeded_root();
    let output = run(root.path(), &["parity", "--baseline", "en", "--format", "json"]);
    assert!(!output.status.success());
    let report: Value = serde_json::from_str(stdout(&output).trim()).expect("json report");
    assert_eq!(report["baseline"], json!("en"));
    assert_eq!(report["baseline_present"], json!(true));
    let french = report["languages"]
        .as_array()
        .expect("languages")
        .iter()
        .find(|entry| entry["language"] == json!("fr"))
        .expect("fr entry");
    assert_eq!(french["missing"], json!(["farewell"]));
}

/// Verifies `--lang-dir` overrides the configured directory.
#[test]
fn lang_dir_flag_overrides_config() {
    let root = TempDir::new().expect("temp dir");
    let other = root.path().join("elsewhere");
    fs::create_dir_all(&other).expect("create dir");
    fs::write(other.join("es.json"), r#"{"a":"b"}"#).expect("write es");
    let output = run(root.path(), &["list", "--lang-dir", other.to_string_lossy().as_ref()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "es\n");
}

/// Verifies `config validate` reports defaults when no file exists.
#[test]
fn config_validate_reports_defaults() {
    let root = TempDir::new().expect("temp dir");
    let output = run(root.path(), &["config", "validate"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Config is valid."));
    assert!(text.contains("built-in defaults"));
}

/// Verifies invalid configuration fails closed.
#[test]
fn config_validate_rejects_unknown_fields() {
    let root = TempDir::new().expect("temp dir");
    let config = root.path().join("custom.toml");
    fs::write(&config, "[store]\nunknown = 1\n").expect("write config");
    let output =
        run(root.path(), &["config", "validate", "--config", config.to_string_lossy().as_ref()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load config"));
}

/// Verifies `--lang fr` localizes output and prints the disclaimer.
#[test]
fn french_output_is_localized() {
    let root = TempDir::new().expect("temp dir");
    let output = run(root.path(), &["--lang", "fr", "list"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Aucune langue trouvée.");
    assert!(stderr(&output).contains("Remarque"));
}

/// Verifies an invalid `TRANSLATE_LANG` value is rejected.
#[test]
fn invalid_lang_env_fails() {
    let root = TempDir::new().expect("temp dir");
    let output = Command::new(translate_bin())
        .current_dir(root.path())
        .env_remove("TRANSLATE_CONFIG")
        .env("TRANSLATE_LANG", "xx")
        .arg("list")
        .output()
        .expect("run translate");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("TRANSLATE_LANG"));
}

/// Verifies a file audit sink records JSON lines for writes.
#[test]
fn file_audit_sink_records_writes() {
    let root = seeded_root();
    let log = root.path().join("audit.log");
    let config = "[audit]\nsink = \"file\"\npath = \"audit.log\"\n";
    fs::write(root.path().join("translate.toml"), config).expect("write config");
    let output =
        run(root.path(), &["set", "--language", "en", "--key", "farewell", "--value", "Later"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let raw = fs::read_to_string(&log).expect("read audit log");
    let events: Vec<Value> =
        raw.lines().map(|line| serde_json::from_str(line).expect("audit line")).collect();
    assert!(events.iter().any(|event| {
        event["event"] == json!("translation_set") && event["key"] == json!("farewell")
    }));
}
