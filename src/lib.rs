//! single-role-delete - remove user accounts that hold exactly one role
//!
//! Queries a user directory for a role, keeps only the accounts whose role
//! set is exactly that role, and reports (dry run) or deletes them. Accounts
//! holding several roles are never touched.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CleanupOptions, CleanupResult, RoleCleaner};
pub use config::Config;
pub use domain::entities::UserAccount;
pub use domain::ports::{CleanupEvent, CleanupEventSink, DirectoryError, UserDirectory};
pub use domain::value_objects::{CleanupAction, RoleName, UserId};
pub use error::{RoleCleanerError, RoleCleanerResult};
pub use infrastructure::{InMemoryUserDirectory, TomlUserDirectory};
