// crates/translate-cli/src/lib.rs
// ============================================================================
// Module: Translate CLI Library
// Description: Shared helpers for the Translate command-line interface.
// Purpose: Expose the localized message catalog to the binary and tests.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! Houses the CLI message catalog. The binary entry point (`src/main.rs`)
//! routes every user-facing string through [`t!`] so output stays consistent
//! across locales.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;
