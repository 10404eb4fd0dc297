//! Cleanup options

use crate::domain::value_objects::RoleName;

/// Invocation parameters, fixed for the duration of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Role to target (defaults to `subscriber`)
    pub role: RoleName,
    /// Whether this is a dry run (no actual deletion)
    pub dry_run: bool,
}

impl CleanupOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target role; blank input keeps the default
    pub fn with_role(mut self, role: impl Into<RoleName>) -> Self {
        self.role = role.into();
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
