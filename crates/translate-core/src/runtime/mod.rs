// crates/translate-core/src/runtime/mod.rs
// ============================================================================
// Module: Translate Runtime
// Description: Store implementations and the translation manager.
// Purpose: Load, serve, and persist language catalogs.
// Dependencies: crate::{audit, core, files, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement [`crate::interfaces::LanguageStore`] for JSON
//! directories and memory, plus the [`Translation`] manager that sits on top
//! of any store.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod json_store;
pub mod memory_store;
pub mod translation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use json_store::JsonDirectoryStore;
pub use json_store::JsonStoreConfig;
pub use memory_store::InMemoryLanguageStore;
pub use translation::Translation;
pub use translation::TranslationError;
