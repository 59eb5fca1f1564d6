// crates/translate-core/src/runtime/memory_store.rs
// ============================================================================
// Module: Translate In-Memory Store
// Description: Simple in-memory language store for tests and embedding.
// Purpose: Provide a deterministic store implementation without filesystem access.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides an in-memory implementation of [`LanguageStore`].
//! Clones share the same underlying map, so a test can keep a handle and
//! inspect what the translation manager wrote.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::core::LanguageMap;
use crate::core::LanguageName;
use crate::interfaces::LanguageStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory language store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLanguageStore {
    /// Catalog map protected by a mutex.
    catalogs: Arc<Mutex<BTreeMap<LanguageName, LanguageMap>>>,
}

impl InMemoryLanguageStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `catalogs`.
    #[must_use]
    pub fn with_catalogs(catalogs: BTreeMap<LanguageName, LanguageMap>) -> Self {
        Self {
            catalogs: Arc::new(Mutex::new(catalogs)),
        }
    }

    /// Locks the catalog map.
    fn guard(&self) -> Result<MutexGuard<'_, BTreeMap<LanguageName, LanguageMap>>, StoreError> {
        self.catalogs
            .lock()
            .map_err(|_| StoreError::Store("language store mutex poisoned".to_string()))
    }
}

impl LanguageStore for InMemoryLanguageStore {
    fn list(&self) -> Result<Vec<LanguageName>, StoreError> {
        Ok(self.guard()?.keys().cloned().collect())
    }

    fn load(&self, language: &LanguageName) -> Result<Option<LanguageMap>, StoreError> {
        Ok(self.guard()?.get(language).cloned())
    }

    fn save(&self, language: &LanguageName, catalog: &LanguageMap) -> Result<(), StoreError> {
        self.guard()?.insert(language.clone(), catalog.clone());
        Ok(())
    }

    fn remove(&self, language: &LanguageName) -> Result<bool, StoreError> {
        Ok(self.guard()?.remove(language).is_some())
    }
}
