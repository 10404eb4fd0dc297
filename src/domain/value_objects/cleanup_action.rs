//! Action taken for an eligible account

use std::fmt;

use serde::{Deserialize, Serialize};

/// What happened to an eligible account during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleanupAction {
    /// Dry run: the account matched but nothing was deleted
    WouldDelete,
    /// The account was removed from the directory
    Deleted,
}

impl CleanupAction {
    /// Action for an eligible account given the run mode
    pub fn for_mode(dry_run: bool) -> Self {
        if dry_run {
            Self::WouldDelete
        } else {
            Self::Deleted
        }
    }

    /// Verb phrase used in the per-user text line
    pub fn verb_phrase(self) -> &'static str {
        match self {
            Self::WouldDelete => "will be deleted",
            Self::Deleted => "was deleted",
        }
    }
}

impl fmt::Display for CleanupAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WouldDelete => write!(f, "would-delete"),
            Self::Deleted => write!(f, "deleted"),
        }
    }
}
