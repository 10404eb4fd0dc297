//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `directory/` - User directory implementations (TOML file, in-memory)
//! - `events/` - Event sinks (text transcript, NDJSON)

pub mod directory;
pub mod events;

// Re-export for convenience
pub use directory::{parse_users, InMemoryUserDirectory, TomlUserDirectory, DEFAULT_USERS_FILE};
pub use events::{JsonEventSink, TextEventSink};
