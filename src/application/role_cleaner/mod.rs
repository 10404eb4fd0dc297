//! Role Cleaner Use Case
//!
//! Finds accounts that hold exactly one given role and reports or deletes them.
//!
//! This module handles:
//! - Querying the user directory for the role
//! - Filtering to single-role accounts
//! - Deleting (live) or reporting (dry run) each match
//! - Isolating per-user deletion failures from the rest of the run

mod options;
mod result;
mod use_case;

pub use options::CleanupOptions;
pub use result::{CleanupResult, FailedDeletion, UserOutcome};
pub use use_case::RoleCleaner;
