//! Cleanup Event Port
//!
//! Provides an observable interface for cleanup runs.
//! Enables the plain-text transcript, JSON event streams, and debugging.

use crate::domain::value_objects::{CleanupAction, RoleName, UserId};

/// Event emitted during a cleanup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupEvent {
    /// Run started, before the directory is queried
    Started { role: RoleName, dry_run: bool },

    /// The directory returned no accounts for the role
    NoMatches { role: RoleName },

    /// An eligible account was reported or deleted
    UserProcessed {
        id: UserId,
        display_name: String,
        role: RoleName,
        action: CleanupAction,
    },

    /// Deleting an eligible account failed; the run continues
    DeleteFailed {
        id: UserId,
        display_name: String,
        error: String,
    },

    /// Run finished
    Finished {
        dry_run: bool,
        processed: usize,
        failed: usize,
    },
}

/// Trait for receiving cleanup events
///
/// Implementations:
/// - `TextEventSink`: the line-oriented transcript on stdout
/// - `JsonEventSink`: NDJSON event stream for automation
/// - `NoopEventSink`: silent operation
pub trait CleanupEventSink: Send + Sync {
    /// Handle a cleanup event
    fn on_event(&self, event: CleanupEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CleanupEventSink for NoopEventSink {
    fn on_event(&self, _event: CleanupEvent) {}
}
