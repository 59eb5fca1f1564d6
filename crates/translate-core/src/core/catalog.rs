// crates/translate-core/src/core/catalog.rs
// ============================================================================
// Module: Translate Catalog Types
// Description: Language catalog maps, placeholder rendering, and parity checks.
// Purpose: Provide pure helpers shared by the translation manager and the CLI.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A language catalog is a flat JSON object mapping translation keys to
//! translated strings. Catalogs are held as ordered maps so serialized output
//! and reports are deterministic.
//!
//! ## Invariants
//! - Placeholder substitution replaces `{name}` occurrences in argument order.
//! - Parity reports list languages and keys in ascending order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::LanguageName;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Translation entries of a single language, keyed by translation key.
pub type LanguageMap = BTreeMap<String, String>;

/// Key differences between one language and the baseline language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageParity {
    /// Language compared against the baseline.
    pub language: LanguageName,
    /// Keys present in the baseline but missing from this language.
    pub missing: Vec<String>,
    /// Keys present in this language but absent from the baseline.
    pub extra: Vec<String>,
}

impl LanguageParity {
    /// Returns true when the language has exactly the baseline keys.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Key parity of every loaded language against a baseline language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityReport {
    /// Baseline language the others are compared to.
    pub baseline: LanguageName,
    /// Whether the baseline catalog was loaded.
    pub baseline_present: bool,
    /// Per-language differences, sorted by language.
    pub languages: Vec<LanguageParity>,
}

impl ParityReport {
    /// Returns true when the baseline exists and every language matches it.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.baseline_present && self.languages.iter().all(LanguageParity::is_consistent)
    }
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Substitutes `{name}` placeholders in `template` with the matching argument values.
///
/// Unknown placeholders are left untouched.
#[must_use]
pub fn substitute_placeholders(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (name, value) in args {
        let placeholder = format!("{{{name}}}");
        result = result.replace(&placeholder, value);
    }
    result
}

// ============================================================================
// SECTION: Parity
// ============================================================================

/// Compares every catalog in `catalogs` with the `baseline` catalog.
#[must_use]
pub fn parity_report(
    baseline: &LanguageName,
    catalogs: &BTreeMap<LanguageName, LanguageMap>,
) -> ParityReport {
    let empty = LanguageMap::new();
    let baseline_catalog = catalogs.get(baseline);
    let baseline_keys = baseline_catalog.unwrap_or(&empty);
    let languages = catalogs
        .iter()
        .filter(|(language, _)| *language != baseline)
        .map(|(language, catalog)| LanguageParity {
            language: language.clone(),
            missing: baseline_keys
                .keys()
                .filter(|key| !catalog.contains_key(*key))
                .cloned()
                .collect(),
            extra: catalog.keys().filter(|key| !baseline_keys.contains_key(*key)).cloned().collect(),
        })
        .collect();
    ParityReport {
        baseline: baseline.clone(),
        baseline_present: baseline_catalog.is_some(),
        languages,
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
