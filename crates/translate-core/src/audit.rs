// crates/translate-core/src/audit.rs
// ============================================================================
// Module: Translate Audit Logging
// Description: Structured audit events for catalog loads and mutations.
// Purpose: Emit JSON-line logs without hard logging dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The translation manager reports every load, write, and removal as a
//! [`TranslationAuditEvent`]. Sinks serialize events as one JSON object per
//! line so deployments can route them to their own logging pipeline.
//!
//! ## Invariants
//! - Recording an event never fails the operation that produced it.
//! - Event payloads carry names and counts only, never translated text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::core::LanguageName;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Audit event classification.
///
/// # Invariants
/// - Serialized labels are stable for log consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventKind {
    /// A catalog was read from the store.
    LanguageLoaded,
    /// A catalog was requested but the store does not hold it.
    LanguageMissing,
    /// A catalog was written to the store.
    LanguageSaved,
    /// A catalog was deleted from the store.
    LanguageRemoved,
    /// A single translation was inserted or replaced.
    TranslationSet,
    /// A single translation was deleted.
    TranslationRemoved,
    /// A store operation failed.
    StoreError,
}

/// Translation audit event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationAuditEvent {
    /// Event classification.
    pub event: AuditEventKind,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Language concerned, when any.
    pub language: Option<String>,
    /// Translation key concerned, when any.
    pub key: Option<String>,
    /// Number of entries in the catalog after the operation.
    pub entries: Option<usize>,
    /// Error detail for failures.
    pub detail: Option<String>,
}

impl TranslationAuditEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(event: AuditEventKind, language: Option<&LanguageName>) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event,
            timestamp_ms,
            language: language.map(ToString::to_string),
            key: None,
            entries: None,
            detail: None,
        }
    }

    /// Attaches the translation key.
    #[must_use]
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Attaches the catalog entry count.
    #[must_use]
    pub const fn with_entries(mut self, entries: usize) -> Self {
        self.entries = Some(entries);
        self
    }

    /// Attaches a failure detail.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for translation events.
pub trait TranslationAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &TranslationAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl TranslationAuditSink for StderrAuditSink {
    fn record(&self, event: &TranslationAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl TranslationAuditSink for FileAuditSink {
    fn record(&self, event: &TranslationAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl TranslationAuditSink for NoopAuditSink {
    fn record(&self, _event: &TranslationAuditEvent) {}
}

/// Audit sink that keeps events in memory for inspection.
#[derive(Default)]
pub struct MemoryAuditSink {
    /// Recorded events in arrival order.
    events: Mutex<Vec<TranslationAuditEvent>>,
}

impl MemoryAuditSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<TranslationAuditEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    /// Returns the recorded event kinds in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<AuditEventKind> {
        self.events().iter().map(|event| event.event).collect()
    }
}

impl TranslationAuditSink for MemoryAuditSink {
    fn record(&self, event: &TranslationAuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
