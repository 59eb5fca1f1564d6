// crates/translate-core/src/lib.rs
// ============================================================================
// Module: Translate Core Library
// Description: Public API surface for language catalog management.
// Purpose: Expose catalog types, JSON file helpers, stores, and the manager.
// Dependencies: crate::{audit, core, files, interfaces, runtime}
// ============================================================================

//! ## Overview
//! `translate-core` manages per-language translation catalogs stored as flat
//! JSON objects, one file per language. The [`Translation`] manager keeps
//! every catalog in memory for lookups and writes each change straight back
//! to its [`LanguageStore`].
//!
//! Catalog files are treated as untrusted input: reads are size-limited and
//! language names are validated before they become file names.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod core;
pub mod files;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use audit::AuditEventKind;
pub use audit::FileAuditSink;
pub use audit::MemoryAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use audit::TranslationAuditEvent;
pub use audit::TranslationAuditSink;
pub use files::FileError;
pub use files::JsonFormat;
pub use interfaces::LanguageStore;
pub use interfaces::StoreError;
pub use runtime::InMemoryLanguageStore;
pub use runtime::JsonDirectoryStore;
pub use runtime::JsonStoreConfig;
pub use runtime::Translation;
pub use runtime::TranslationError;
