//! Use Case Factory
//!
//! Creates use cases and event sinks with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::RoleCleaner;
use crate::domain::ports::CleanupEventSink;
use crate::infrastructure::{JsonEventSink, TextEventSink, TomlUserDirectory};

use super::output::OutputFormat;

/// Type alias for the concrete RoleCleaner used by the binary
pub type ConcreteRoleCleaner = RoleCleaner<TomlUserDirectory>;

/// Create a role cleaner over a TOML users file
pub fn create_role_cleaner(users_file: impl Into<PathBuf>) -> ConcreteRoleCleaner {
    RoleCleaner::new(TomlUserDirectory::new(users_file))
}

/// Create the event sink for an output format
pub fn create_event_sink(format: OutputFormat) -> Arc<dyn CleanupEventSink> {
    match format {
        OutputFormat::Text => Arc::new(TextEventSink::stdio()),
        OutputFormat::Json => Arc::new(JsonEventSink::stdout()),
    }
}
