// crates/translate-config/src/lib.rs
// ============================================================================
// Module: Translate Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for translate.toml semantics.
// Dependencies: translate-core, serde, toml
// ============================================================================

//! ## Overview
//! `translate-config` defines the configuration model for the Translate CLI:
//! where catalogs live, how they are written, where audit events go, and
//! which language lookups fall back to. Validation is strict and fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
