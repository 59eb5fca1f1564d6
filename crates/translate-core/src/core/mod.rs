// crates/translate-core/src/core/mod.rs
// ============================================================================
// Module: Translate Core Types
// Description: Identifiers and catalog types for language catalogs.
// Purpose: Provide stable, serializable types shared by stores and the CLI.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Core types describe language catalogs independently of where they are
//! stored. Nothing in this module performs I/O.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod catalog;
pub mod identifiers;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::LanguageMap;
pub use catalog::LanguageParity;
pub use catalog::ParityReport;
pub use catalog::parity_report;
pub use catalog::substitute_placeholders;
pub use identifiers::IdentifierError;
pub use identifiers::LanguageName;
pub use identifiers::TranslationKey;
