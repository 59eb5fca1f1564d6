// crates/translate-core/src/runtime/translation.rs
// ============================================================================
// Module: Translate Manager
// Description: In-memory view of every language catalog with write-through updates.
// Purpose: Serve translation lookups and persist every mutation immediately.
// Dependencies: crate::{audit, core, interfaces}, thiserror
// ============================================================================

//! ## Overview
//! [`Translation`] loads every catalog a [`LanguageStore`] holds and keeps
//! them in memory for lookups. Mutations are applied in memory, written to the
//! store, and then the affected catalog is re-read so the in-memory view is
//! exactly what the store returns.
//!
//! ## Invariants
//! - Lookups never touch the store.
//! - A failed write restores the in-memory catalog to its previous state.
//! - Reloading a catalog the store no longer holds drops it from memory.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

use crate::audit::AuditEventKind;
use crate::audit::TranslationAuditEvent;
use crate::audit::TranslationAuditSink;
use crate::core::LanguageMap;
use crate::core::LanguageName;
use crate::core::ParityReport;
use crate::core::TranslationKey;
use crate::core::parity_report;
use crate::core::substitute_placeholders;
use crate::interfaces::LanguageStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Translation manager errors.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The language is not loaded in memory.
    #[error("language {0} is not loaded")]
    UnknownLanguage(LanguageName),
}

// ============================================================================
// SECTION: Translation Manager
// ============================================================================

/// Language catalogs loaded from a store, with write-through mutation.
pub struct Translation<S: LanguageStore> {
    /// Backing store.
    store: S,
    /// Audit sink for loads and writes.
    audit: Arc<dyn TranslationAuditSink>,
    /// Loaded catalogs by language.
    catalogs: BTreeMap<LanguageName, LanguageMap>,
}

impl<S: LanguageStore> Translation<S> {
    /// Creates a manager and loads every catalog held by `store`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] when listing or loading a catalog fails.
    pub fn open(store: S, audit: Arc<dyn TranslationAuditSink>) -> Result<Self, TranslationError> {
        let mut translation = Self {
            store,
            audit,
            catalogs: BTreeMap::new(),
        };
        translation.update_languages()?;
        Ok(translation)
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    // ------------------------------------------------------------------------
    // Loading and saving
    // ------------------------------------------------------------------------

    /// Reloads every catalog the store lists.
    ///
    /// Catalogs loaded earlier but no longer listed stay in memory.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] when listing or loading fails.
    pub fn update_languages(&mut self) -> Result<(), TranslationError> {
        let languages = self.observe(None, self.store.list())?;
        for language in &languages {
            self.update_language(language)?;
        }
        Ok(())
    }

    /// Reloads one catalog from the store, dropping it if the store no longer has it.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] when loading fails.
    pub fn update_language(&mut self, language: &LanguageName) -> Result<(), TranslationError> {
        match self.observe(Some(language), self.store.load(language))? {
            Some(catalog) => {
                self.record(
                    TranslationAuditEvent::new(AuditEventKind::LanguageLoaded, Some(language))
                        .with_entries(catalog.len()),
                );
                self.catalogs.insert(language.clone(), catalog);
            }
            None => {
                self.record(TranslationAuditEvent::new(
                    AuditEventKind::LanguageMissing,
                    Some(language),
                ));
                self.catalogs.remove(language);
            }
        }
        Ok(())
    }

    /// Writes every loaded catalog to the store.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] on the first failed write.
    pub fn save_languages(&self) -> Result<(), TranslationError> {
        for language in self.catalogs.keys() {
            self.save_language(language)?;
        }
        Ok(())
    }

    /// Writes one loaded catalog to the store.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::UnknownLanguage`] when the catalog is not
    /// loaded, or a store error when the write fails.
    pub fn save_language(&self, language: &LanguageName) -> Result<(), TranslationError> {
        let catalog = self
            .catalogs
            .get(language)
            .ok_or_else(|| TranslationError::UnknownLanguage(language.clone()))?;
        self.observe(Some(language), self.store.save(language, catalog))?;
        self.record(
            TranslationAuditEvent::new(AuditEventKind::LanguageSaved, Some(language))
                .with_entries(catalog.len()),
        );
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Catalog operations
    // ------------------------------------------------------------------------

    /// Replaces a whole catalog, writes it, and reloads it.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] when the write or reload fails.
    pub fn set_language(
        &mut self,
        language: &LanguageName,
        catalog: LanguageMap,
    ) -> Result<(), TranslationError> {
        let previous = self.catalogs.insert(language.clone(), catalog);
        self.write_through(language, previous)
    }

    /// Returns a loaded catalog.
    #[must_use]
    pub fn language(&self, language: &LanguageName) -> Option<&LanguageMap> {
        self.catalogs.get(language)
    }

    /// Returns every loaded language in ascending order.
    #[must_use]
    pub fn languages(&self) -> Vec<&LanguageName> {
        self.catalogs.keys().collect()
    }

    /// Removes a catalog from the store and from memory.
    ///
    /// Returns whether either held the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] when the store removal fails.
    pub fn remove_language(&mut self, language: &LanguageName) -> Result<bool, TranslationError> {
        let stored = self.observe(Some(language), self.store.remove(language))?;
        let loaded = self.catalogs.remove(language).is_some();
        if stored || loaded {
            self.record(TranslationAuditEvent::new(
                AuditEventKind::LanguageRemoved,
                Some(language),
            ));
        }
        Ok(stored || loaded)
    }

    // ------------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------------

    /// Inserts or replaces one translation, creating the catalog when missing.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] when the write or reload fails.
    pub fn set_translation(
        &mut self,
        language: &LanguageName,
        key: &TranslationKey,
        value: impl Into<String>,
    ) -> Result<(), TranslationError> {
        let previous = self.catalogs.get(language).cloned();
        self.catalogs
            .entry(language.clone())
            .or_default()
            .insert(key.as_str().to_string(), value.into());
        self.write_through(language, previous)?;
        self.record(
            TranslationAuditEvent::new(AuditEventKind::TranslationSet, Some(language))
                .with_key(key.as_str()),
        );
        Ok(())
    }

    /// Sets the same key in several languages, then saves and reloads everything.
    ///
    /// Languages are processed in ascending order and the first failure stops
    /// the batch.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] on the first failed write or reload.
    pub fn set_translations(
        &mut self,
        key: &TranslationKey,
        translations: &BTreeMap<LanguageName, String>,
    ) -> Result<(), TranslationError> {
        for (language, value) in translations {
            self.set_translation(language, key, value.clone())?;
        }
        self.save_languages()?;
        self.update_languages()
    }

    /// Returns one translation, or `None` when the language or key is missing.
    #[must_use]
    pub fn translation(&self, language: &LanguageName, key: &str) -> Option<&str> {
        self.catalogs.get(language).and_then(|catalog| catalog.get(key)).map(String::as_str)
    }

    /// Deletes one translation, returning whether it existed.
    ///
    /// Nothing is written when the language or key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] when the write or reload fails.
    pub fn remove_translation(
        &mut self,
        language: &LanguageName,
        key: &str,
    ) -> Result<bool, TranslationError> {
        let Some(catalog) = self.catalogs.get_mut(language) else {
            return Ok(false);
        };
        let previous = catalog.clone();
        if catalog.remove(key).is_none() {
            return Ok(false);
        }
        self.write_through(language, Some(previous))?;
        self.record(
            TranslationAuditEvent::new(AuditEventKind::TranslationRemoved, Some(language))
                .with_key(key),
        );
        Ok(true)
    }

    // ------------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------------

    /// Renders a translation with placeholder substitution.
    ///
    /// Lookup falls back from `language` to `fallback` and finally to the key itself.
    #[must_use]
    pub fn render(
        &self,
        language: &LanguageName,
        key: &str,
        fallback: Option<&LanguageName>,
        args: &[(&str, &str)],
    ) -> String {
        let template = self
            .translation(language, key)
            .or_else(|| fallback.and_then(|fallback| self.translation(fallback, key)))
            .unwrap_or(key);
        substitute_placeholders(template, args)
    }

    /// Compares every loaded catalog with the `baseline` catalog.
    #[must_use]
    pub fn parity_report(&self, baseline: &LanguageName) -> ParityReport {
        parity_report(baseline, &self.catalogs)
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    /// Saves and reloads `language`, restoring `previous` in memory if the save fails.
    fn write_through(
        &mut self,
        language: &LanguageName,
        previous: Option<LanguageMap>,
    ) -> Result<(), TranslationError> {
        if let Err(err) = self.save_language(language) {
            match previous {
                Some(catalog) => {
                    self.catalogs.insert(language.clone(), catalog);
                }
                None => {
                    self.catalogs.remove(language);
                }
            }
            return Err(err);
        }
        self.update_language(language)
    }

    /// Converts a store result, auditing failures.
    fn observe<T>(
        &self,
        language: Option<&LanguageName>,
        result: Result<T, StoreError>,
    ) -> Result<T, TranslationError> {
        result.map_err(|err| {
            self.record(
                TranslationAuditEvent::new(AuditEventKind::StoreError, language)
                    .with_detail(err.to_string()),
            );
            TranslationError::Store(err)
        })
    }

    /// Forwards an event to the audit sink.
    fn record(&self, event: TranslationAuditEvent) {
        self.audit.record(&event);
    }
}
