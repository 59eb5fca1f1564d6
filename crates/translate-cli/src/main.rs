// crates/translate-cli/src/main.rs
// ============================================================================
// Module: Translate CLI Entry Point
// Description: Command dispatcher for language catalog maintenance.
// Purpose: Provide a localized CLI over the JSON language directory.
// Dependencies: clap, serde, serde_jcs, thiserror, translate-config, translate-core.
// ============================================================================

//! ## Overview
//! The `translate` binary lists, reads, edits, imports, normalizes, and
//! checks the language catalogs stored in a JSON language directory. Every
//! command loads `translate.toml` (or defaults), opens a
//! [`JsonDirectoryStore`], and works through [`Translation`] so writes are
//! saved, reloaded, and audited the same way as library callers.
//!
//! All user-facing strings come from the i18n catalog.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;
use translate_cli::i18n::Locale;
use translate_cli::i18n::set_locale;
use translate_cli::t;
use translate_config::TranslateConfig;
use translate_core::JsonDirectoryStore;
use translate_core::LanguageMap;
use translate_core::LanguageName;
use translate_core::LanguageStore;
use translate_core::ParityReport;
use translate_core::Translation;
use translate_core::TranslationKey;
use translate_core::files::read_json_file;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Environment variable selecting the CLI output language.
const LANG_ENV: &str = "TRANSLATE_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "translate", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `TRANSLATE_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Config file path (defaults to translate.toml or `TRANSLATE_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Language directory, overriding `store.lang_dir` from the config.
    #[arg(long = "lang-dir", value_name = "DIR", global = true)]
    lang_dir: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the languages present in the language directory.
    List(ListCommand),
    /// Print every translation of one language.
    Show(ShowCommand),
    /// Print one translation.
    Get(GetCommand),
    /// Insert or replace one translation.
    Set(SetCommand),
    /// Set one key across several languages at once.
    SetAll(SetAllCommand),
    /// Delete one translation.
    Remove(RemoveCommand),
    /// Replace a language catalog with the contents of a JSON file.
    Import(ImportCommand),
    /// Rewrite every catalog in the configured JSON format.
    Normalize,
    /// Compare the keys of every language with a baseline language.
    Parity(ParityCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate the configuration.
    Validate,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// French.
    Fr,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Fr => Self::Fr,
        }
    }
}

/// Output format for listing commands.
#[derive(ValueEnum, Copy, Clone, Debug, Default)]
enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Canonical JSON.
    Json,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
struct ListCommand {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for `show`.
#[derive(Args, Debug)]
struct ShowCommand {
    /// Language to print.
    #[arg(long, value_name = "LANGUAGE")]
    language: String,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for `get`.
#[derive(Args, Debug)]
struct GetCommand {
    /// Language to read from.
    #[arg(long, value_name = "LANGUAGE")]
    language: String,
    /// Translation key.
    #[arg(long, value_name = "KEY")]
    key: String,
    /// Fallback language (defaults to `lookup.fallback_language`).
    #[arg(long, value_name = "LANGUAGE", conflicts_with = "no_fallback")]
    fallback: Option<String>,
    /// Disable the fallback language.
    #[arg(long = "no-fallback", action = ArgAction::SetTrue)]
    no_fallback: bool,
    /// Placeholder substitution, repeatable (`--arg name=Ada`).
    #[arg(long = "arg", value_name = "NAME=VALUE")]
    args: Vec<String>,
}

/// Arguments for `set`.
#[derive(Args, Debug)]
struct SetCommand {
    /// Language to write to.
    #[arg(long, value_name = "LANGUAGE")]
    language: String,
    /// Translation key.
    #[arg(long, value_name = "KEY")]
    key: String,
    /// Translated text.
    #[arg(long, value_name = "TEXT")]
    value: String,
}

/// Arguments for `set-all`.
#[derive(Args, Debug)]
struct SetAllCommand {
    /// Translation key.
    #[arg(long, value_name = "KEY")]
    key: String,
    /// Translation per language, repeatable (`--entry fr=Bonjour`).
    #[arg(long = "entry", value_name = "LANGUAGE=TEXT", required = true)]
    entries: Vec<String>,
}

/// Arguments for `remove`.
#[derive(Args, Debug)]
struct RemoveCommand {
    /// Language to remove from.
    #[arg(long, value_name = "LANGUAGE")]
    language: String,
    /// Translation key.
    #[arg(long, value_name = "KEY")]
    key: String,
}

/// Arguments for `import`.
#[derive(Args, Debug)]
struct ImportCommand {
    /// Language whose catalog is replaced.
    #[arg(long, value_name = "LANGUAGE")]
    language: String,
    /// JSON object of key/value translations.
    #[arg(long, value_name = "PATH")]
    file: PathBuf,
}

/// Arguments for `parity`.
#[derive(Args, Debug)]
struct ParityCommand {
    /// Language the others are compared to.
    #[arg(long, value_name = "LANGUAGE")]
    baseline: String,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Settings shared by every command that touches the language directory.
struct Workspace {
    /// Loaded configuration.
    config: TranslateConfig,
    /// `--lang-dir` override.
    lang_dir: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = TranslateConfig::load(cli.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let workspace = Workspace {
        config,
        lang_dir: cli.lang_dir,
    };

    match command {
        Commands::List(command) => command_list(&workspace, &command),
        Commands::Show(command) => command_show(&workspace, &command),
        Commands::Get(command) => command_get(&workspace, &command),
        Commands::Set(command) => command_set(&workspace, &command),
        Commands::SetAll(command) => command_set_all(&workspace, &command),
        Commands::Remove(command) => command_remove(&workspace, &command),
        Commands::Import(command) => command_import(&workspace, &command),
        Commands::Normalize => command_normalize(&workspace),
        Commands::Parity(command) => command_parity(&workspace, &command),
        Commands::Config {
            command: ConfigCommand::Validate,
        } => command_config_validate(&workspace),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Read Commands
// ============================================================================

/// Executes `list`.
///
/// Reads directory names only, so a corrupt catalog does not hide the others.
fn command_list(workspace: &Workspace, command: &ListCommand) -> CliResult<ExitCode> {
    let store = open_store(workspace)?;
    let languages =
        store.list().map_err(|err| CliError::new(t!("list.failed", error = err)))?;
    match command.format {
        OutputFormat::Json => write_json(&languages)?,
        OutputFormat::Text if languages.is_empty() => stdout_line(&t!("list.none"))?,
        OutputFormat::Text => {
            for language in &languages {
                stdout_line(language.as_str())?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `show`.
fn command_show(workspace: &Workspace, command: &ShowCommand) -> CliResult<ExitCode> {
    let language = parse_language(&command.language)?;
    let translation = open_translation(workspace)?;
    let catalog = translation
        .language(&language)
        .ok_or_else(|| CliError::new(t!("show.not_found", language = language)))?;
    match command.format {
        OutputFormat::Json => write_json(catalog)?,
        OutputFormat::Text if catalog.is_empty() => {
            stdout_line(&t!("show.empty", language = language))?;
        }
        OutputFormat::Text => {
            for (key, value) in catalog {
                stdout_line(&t!("show.entry", key = key, value = value))?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `get`.
///
/// Falls back to the fallback language when the key is missing, and fails
/// when neither language has it.
fn command_get(workspace: &Workspace, command: &GetCommand) -> CliResult<ExitCode> {
    let language = parse_language(&command.language)?;
    let fallback = match (&command.fallback, command.no_fallback) {
        (_, true) => None,
        (Some(name), false) => Some(parse_language(name)?),
        (None, false) => Some(
            workspace
                .config
                .fallback_language()
                .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?,
        ),
    };
    let assignments = parse_assignments("--arg", &command.args)?;
    let args: Vec<(&str, &str)> =
        assignments.iter().map(|(name, value)| (name.as_str(), value.as_str())).collect();

    let translation = open_translation(workspace)?;
    let found = translation.translation(&language, &command.key).is_some()
        || fallback
            .as_ref()
            .is_some_and(|fallback| translation.translation(fallback, &command.key).is_some());
    if !found {
        return Err(CliError::new(t!(
            "get.not_found",
            key = command.key,
            language = language
        )));
    }
    let rendered = translation.render(&language, &command.key, fallback.as_ref(), &args);
    stdout_line(&rendered)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `parity`.
///
/// Exits with failure when any language differs from the baseline.
fn command_parity(workspace: &Workspace, command: &ParityCommand) -> CliResult<ExitCode> {
    let baseline = parse_language(&command.baseline)?;
    let translation = open_translation(workspace)?;
    let report = translation.parity_report(&baseline);
    match command.format {
        OutputFormat::Json => write_json(&report)?,
        OutputFormat::Text => write_parity_text(&report)?,
    }
    if report.is_consistent() { Ok(ExitCode::SUCCESS) } else { Ok(ExitCode::FAILURE) }
}

/// Writes a parity report as text lines.
fn write_parity_text(report: &ParityReport) -> CliResult<()> {
    if !report.baseline_present {
        return stdout_line(&t!("parity.baseline_missing", baseline = report.baseline));
    }
    stdout_line(&t!("parity.header", baseline = report.baseline))?;
    for parity in &report.languages {
        if parity.is_consistent() {
            stdout_line(&t!("parity.language_ok", language = parity.language))?;
            continue;
        }
        for key in &parity.missing {
            stdout_line(&t!("parity.missing", language = parity.language, key = key))?;
        }
        for key in &parity.extra {
            stdout_line(&t!("parity.extra", language = parity.language, key = key))?;
        }
    }
    let mismatched = report.languages.iter().filter(|parity| !parity.is_consistent()).count();
    if mismatched == 0 {
        stdout_line(&t!("parity.summary.ok"))
    } else {
        stdout_line(&t!("parity.summary.mismatch", count = mismatched))
    }
}

// ============================================================================
// SECTION: Write Commands
// ============================================================================

/// Executes `set`.
fn command_set(workspace: &Workspace, command: &SetCommand) -> CliResult<ExitCode> {
    let language = parse_language(&command.language)?;
    let key = parse_key(&command.key)?;
    let mut translation = open_translation(workspace)?;
    translation
        .set_translation(&language, &key, command.value.clone())
        .map_err(|err| CliError::new(t!("set.failed", error = err)))?;
    stdout_line(&t!("set.ok", key = key, language = language))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `set-all`.
fn command_set_all(workspace: &Workspace, command: &SetAllCommand) -> CliResult<ExitCode> {
    let key = parse_key(&command.key)?;
    let mut values = BTreeMap::new();
    for (name, value) in parse_assignments("--entry", &command.entries)? {
        let language = parse_language(&name)?;
        if values.contains_key(&language) {
            return Err(CliError::new(t!("set_all.duplicate", language = language)));
        }
        values.insert(language, value);
    }
    let mut translation = open_translation(workspace)?;
    translation
        .set_translations(&key, &values)
        .map_err(|err| CliError::new(t!("set.failed", error = err)))?;
    stdout_line(&t!("set_all.ok", key = key, count = values.len()))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `remove`.
///
/// Removing a missing key is reported but is not a failure.
fn command_remove(workspace: &Workspace, command: &RemoveCommand) -> CliResult<ExitCode> {
    let language = parse_language(&command.language)?;
    let mut translation = open_translation(workspace)?;
    let removed = translation
        .remove_translation(&language, &command.key)
        .map_err(|err| CliError::new(t!("remove.failed", error = err)))?;
    if removed {
        stdout_line(&t!("remove.ok", key = command.key, language = language))?;
    } else {
        stdout_line(&t!("remove.not_found", key = command.key, language = language))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `import`.
fn command_import(workspace: &Workspace, command: &ImportCommand) -> CliResult<ExitCode> {
    let language = parse_language(&command.language)?;
    let catalog = read_import_file(&command.file, workspace.config.store.max_file_bytes)?;
    for key in catalog.keys() {
        parse_key(key)?;
    }
    let count = catalog.len();
    let mut translation = open_translation(workspace)?;
    translation
        .set_language(&language, catalog)
        .map_err(|err| CliError::new(t!("import.failed", error = err)))?;
    stdout_line(&t!("import.ok", count = count, language = language))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `normalize`.
fn command_normalize(workspace: &Workspace) -> CliResult<ExitCode> {
    let translation = open_translation(workspace)?;
    translation
        .save_languages()
        .map_err(|err| CliError::new(t!("normalize.failed", error = err)))?;
    stdout_line(&t!("normalize.ok", count = translation.languages().len()))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Executes `config validate`.
///
/// Loading already validated the file; this reports where it came from.
fn command_config_validate(workspace: &Workspace) -> CliResult<ExitCode> {
    stdout_line(&t!("config.validate.ok"))?;
    match &workspace.config.source_path {
        Some(path) => stdout_line(&t!("config.validate.source", path = path.display()))?,
        None => stdout_line(&t!("config.validate.defaults"))?,
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Store Helpers
// ============================================================================

/// Opens the JSON language directory described by the workspace.
fn open_store(workspace: &Workspace) -> CliResult<JsonDirectoryStore> {
    let settings = workspace.config.json_store_config(workspace.lang_dir.as_deref());
    JsonDirectoryStore::new(settings)
        .map_err(|err| CliError::new(t!("store.open_failed", error = err)))
}

/// Opens the store and loads every catalog through [`Translation`].
fn open_translation(workspace: &Workspace) -> CliResult<Translation<JsonDirectoryStore>> {
    let store = open_store(workspace)?;
    let audit = workspace
        .config
        .audit_sink()
        .map_err(|err| CliError::new(t!("store.audit_failed", error = err)))?;
    Translation::open(store, audit)
        .map_err(|err| CliError::new(t!("store.load_failed", error = err)))
}

/// Reads a JSON catalog to import, bounded by `max_bytes`.
fn read_import_file(path: &Path, max_bytes: usize) -> CliResult<LanguageMap> {
    match read_json_file::<LanguageMap>(path, max_bytes) {
        Ok(Some(catalog)) => Ok(catalog),
        Ok(None) => Err(CliError::new(t!("import.missing", path = path.display()))),
        Err(err) => {
            Err(CliError::new(t!("import.read_failed", path = path.display(), error = err)))
        }
    }
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Parses a language name argument.
fn parse_language(value: &str) -> CliResult<LanguageName> {
    LanguageName::parse(value).map_err(|err| {
        CliError::new(t!("input.language_invalid", value = value, error = err))
    })
}

/// Parses a translation key argument.
fn parse_key(value: &str) -> CliResult<TranslationKey> {
    TranslationKey::parse(value)
        .map_err(|err| CliError::new(t!("input.key_invalid", value = value, error = err)))
}

/// Splits repeated `NAME=VALUE` arguments at the first `=`.
///
/// The value may itself contain `=` and may be empty; the name may not.
fn parse_assignments(flag: &str, raw: &[String]) -> CliResult<Vec<(String, String)>> {
    raw.iter()
        .map(|entry| match entry.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok((name.trim().to_string(), value.to_string()))
            }
            _ => Err(CliError::new(t!("input.assignment_invalid", flag = flag, value = entry))),
        })
        .collect()
}

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stdout, mapping failures to a [`CliError`].
fn stdout_line(message: &str) -> CliResult<()> {
    write_stdout_line(message).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes canonical JSON to stdout with a trailing newline.
fn write_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let mut bytes = serde_jcs::to_vec(value)
        .map_err(|err| CliError::new(t!("output.json_failed", error = err)))?;
    bytes.push(b'\n');
    let mut stdout = std::io::stdout();
    stdout.write_all(&bytes).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::use_debug,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use super::LangArg;
    use super::Locale;
    use super::parse_assignments;
    use super::resolve_locale;

    /// The `--lang` flag takes precedence over `TRANSLATE_LANG`.
    #[test]
    fn lang_flag_wins_over_environment() {
        let locale = resolve_locale(Some(LangArg::Fr), Some("en")).expect("locale");
        assert_eq!(locale, Locale::Fr);
    }

    /// `TRANSLATE_LANG` is parsed leniently and rejected when unknown.
    #[test]
    fn environment_locale_is_parsed() {
        assert_eq!(resolve_locale(None, Some("fr_FR")).expect("locale"), Locale::Fr);
        assert_eq!(resolve_locale(None, None).expect("locale"), Locale::En);
        assert!(resolve_locale(None, Some("xx")).is_err());
    }

    /// Assignments keep any later `=` in the value.
    #[test]
    fn assignments_split_at_first_equals() {
        let raw = vec!["fr=a=b".to_string(), "en=".to_string()];
        let parsed = parse_assignments("--entry", &raw).expect("assignments");
        assert_eq!(parsed, vec![
            ("fr".to_string(), "a=b".to_string()),
            ("en".to_string(), String::new()),
        ]);
    }

    /// Assignments without a name or `=` are rejected.
    #[test]
    fn assignments_require_a_name() {
        assert!(parse_assignments("--entry", &["=value".to_string()]).is_err());
        assert!(parse_assignments("--entry", &["novalue".to_string()]).is_err());
    }
}
