// crates/translate-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Message catalogs and translation utilities for the CLI.
// Purpose: Keep every user-facing string in one localized catalog.
// Dependencies: Standard library collections.
// ============================================================================

//! ## Overview
//! The Translate CLI never formats user-facing text inline. Every message is
//! looked up by key in a per-locale catalog through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - Catalogs are built once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Every locale carries the same keys and the same placeholders as English.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
///
/// # Invariants
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// French.
    Fr,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Parses a locale tag, ignoring case and any region suffix (`fr-CA`, `en_US`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let primary = normalized.split(['-', '_']).next().unwrap_or("");
        match primary {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }
}

/// Ordered list of supported CLI locales.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Fr];

/// A named placeholder value captured by the [`macro@crate::t`] macro.
#[derive(Clone)]
pub struct MessageArg {
    /// Placeholder name without braces (for example, `language`).
    pub key: &'static str,
    /// Preformatted value substituted for the placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`].
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Process-wide locale selection.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// English catalog.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "translate {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("output.json_failed", "Failed to render JSON output: {error}"),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'fr'."),
    (
        "i18n.disclaimer.machine_translated",
        "Note: non-English output is machine-translated and may be inaccurate.",
    ),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config is valid."),
    ("config.validate.source", "Loaded from {path}"),
    ("config.validate.defaults", "No config file found; built-in defaults are in effect."),
    ("store.open_failed", "Failed to open the language directory: {error}"),
    ("store.audit_failed", "Failed to open the audit sink: {error}"),
    ("store.load_failed", "Failed to load languages: {error}"),
    ("input.language_invalid", "Invalid language name '{value}': {error}"),
    ("input.key_invalid", "Invalid translation key '{value}': {error}"),
    ("input.assignment_invalid", "Invalid {flag} value '{value}': expected NAME=VALUE."),
    ("list.none", "No languages found."),
    ("list.failed", "Failed to list languages: {error}"),
    ("show.not_found", "Language not found: {language}"),
    ("show.empty", "Language {language} has no translations."),
    ("show.entry", "{key} = {value}"),
    ("get.not_found", "No translation for '{key}' in {language}."),
    ("set.ok", "Set '{key}' in {language}."),
    ("set.failed", "Failed to write translation: {error}"),
    ("set_all.duplicate", "Language {language} was given more than once."),
    ("set_all.ok", "Set '{key}' in {count} languages."),
    ("remove.ok", "Removed '{key}' from {language}."),
    ("remove.not_found", "No translation for '{key}' in {language}; nothing removed."),
    ("remove.failed", "Failed to remove translation: {error}"),
    ("import.read_failed", "Failed to read {path}: {error}"),
    ("import.missing", "Import file not found: {path}"),
    ("import.ok", "Imported {count} translations into {language}."),
    ("import.failed", "Failed to import catalog: {error}"),
    ("normalize.ok", "Rewrote {count} catalogs."),
    ("normalize.failed", "Failed to rewrite catalogs: {error}"),
    ("parity.header", "Key parity against {baseline}:"),
    ("parity.baseline_missing", "Baseline language {baseline} is not loaded."),
    ("parity.language_ok", "- {language}: ok"),
    ("parity.missing", "- {language}: missing '{key}'"),
    ("parity.extra", "- {language}: extra '{key}'"),
    ("parity.summary.ok", "All languages match the baseline."),
    ("parity.summary.mismatch", "{count} languages differ from the baseline."),
];

/// French catalog.
const CATALOG_FR: &[(&str, &str)] = &[
    ("main.version", "translate {version}"),
    ("output.stream.stdout", "sortie standard"),
    ("output.stream.stderr", "sortie d'erreur"),
    ("output.stream.unknown", "sortie"),
    ("output.write_failed", "Impossible d'écrire sur {stream} : {error}"),
    ("output.json_failed", "Impossible de produire la sortie JSON : {error}"),
    (
        "i18n.lang.invalid_env",
        "Valeur invalide pour {env} : {value}. Valeurs attendues : 'en' ou 'fr'.",
    ),
    (
        "i18n.disclaimer.machine_translated",
        "Remarque : la sortie non anglaise est traduite automatiquement et peut être inexacte.",
    ),
    ("config.load_failed", "Impossible de charger la configuration : {error}"),
    ("config.validate.ok", "La configuration est valide."),
    ("config.validate.source", "Chargée depuis {path}"),
    (
        "config.validate.defaults",
        "Aucun fichier de configuration trouvé ; les valeurs par défaut s'appliquent.",
    ),
    ("store.open_failed", "Impossible d'ouvrir le répertoire des langues : {error}"),
    ("store.audit_failed", "Impossible d'ouvrir le journal d'audit : {error}"),
    ("store.load_failed", "Impossible de charger les langues : {error}"),
    ("input.language_invalid", "Nom de langue invalide '{value}' : {error}"),
    ("input.key_invalid", "Clé de traduction invalide '{value}' : {error}"),
    (
        "input.assignment_invalid",
        "Valeur {flag} invalide '{value}' : format attendu NOM=VALEUR.",
    ),
    ("list.none", "Aucune langue trouvée."),
    ("list.failed", "Impossible de lister les langues : {error}"),
    ("show.not_found", "Langue introuvable : {language}"),
    ("show.empty", "La langue {language} ne contient aucune traduction."),
    ("show.entry", "{key} = {value}"),
    ("get.not_found", "Aucune traduction pour '{key}' en {language}."),
    ("set.ok", "'{key}' défini en {language}."),
    ("set.failed", "Impossible d'écrire la traduction : {error}"),
    ("set_all.duplicate", "La langue {language} a été indiquée plusieurs fois."),
    ("set_all.ok", "'{key}' défini dans {count} langues."),
    ("remove.ok", "'{key}' supprimé de {language}."),
    (
        "remove.not_found",
        "Aucune traduction pour '{key}' en {language} ; rien n'a été supprimé.",
    ),
    ("remove.failed", "Impossible de supprimer la traduction : {error}"),
    ("import.read_failed", "Impossible de lire {path} : {error}"),
    ("import.missing", "Fichier d'import introuvable : {path}"),
    ("import.ok", "{count} traductions importées dans {language}."),
    ("import.failed", "Impossible d'importer le catalogue : {error}"),
    ("normalize.ok", "{count} catalogues réécrits."),
    ("normalize.failed", "Impossible de réécrire les catalogues : {error}"),
    ("parity.header", "Parité des clés par rapport à {baseline} :"),
    ("parity.baseline_missing", "La langue de référence {baseline} n'est pas chargée."),
    ("parity.language_ok", "- {language} : ok"),
    ("parity.missing", "- {language} : '{key}' manquante"),
    ("parity.extra", "- {language} : '{key}' en trop"),
    ("parity.summary.ok", "Toutes les langues correspondent à la référence."),
    ("parity.summary.mismatch", "{count} langues diffèrent de la référence."),
];

/// Returns the raw catalog entries for `locale`, in declaration order.
#[must_use]
pub fn catalog_entries_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::Fr => CATALOG_FR,
    }
}

/// Returns the indexed message catalog for `locale`.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_FR_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    let cell = match locale {
        Locale::En => &CATALOG_EN_MAP,
        Locale::Fr => &CATALOG_FR_MAP,
    };
    cell.get_or_init(|| catalog_entries_for(locale).iter().copied().collect())
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` in the current locale, substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    translate_in(current_locale(), key, args)
}

/// Translates `key` in an explicit `locale`, substituting `args`.
#[must_use]
pub fn translate_in(locale: Locale, key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    let mut result = template.to_string();
    for arg in args {
        result = result.replace(&format!("{{{}}}", arg.key), &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// Named arguments are substituted into `{placeholder}` positions of the
/// catalog template for the current locale.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
