//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RoleCleaner` - Query, filter, and delete (or report) single-role accounts

pub mod role_cleaner;

pub use role_cleaner::{CleanupOptions, CleanupResult, FailedDeletion, RoleCleaner, UserOutcome};
