//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod cleanup_events;
pub mod user_directory;

pub use cleanup_events::{CleanupEvent, CleanupEventSink, NoopEventSink};
pub use user_directory::{DirectoryError, DirectoryResult, UserDirectory};
