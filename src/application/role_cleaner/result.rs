//! Cleanup result types

use serde::Serialize;

use crate::domain::value_objects::{CleanupAction, RoleName, UserId};

/// An eligible account that was reported or deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserOutcome {
    pub id: UserId,
    pub display_name: String,
    pub role: RoleName,
    pub action: CleanupAction,
}

/// An eligible account whose deletion failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedDeletion {
    pub id: UserId,
    pub display_name: String,
    pub error: String,
}

/// Result of a cleanup run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupResult {
    /// Accounts reported (dry run) or deleted (live), in directory order
    pub outcomes: Vec<UserOutcome>,
    /// Accounts whose deletion failed
    pub failures: Vec<FailedDeletion>,
}

impl CleanupResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_outcome(&mut self, outcome: UserOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn add_failure(&mut self, failure: FailedDeletion) {
        self.failures.push(failure);
    }

    /// Number of accounts successfully acted on
    pub fn processed_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    /// True when no deletion failed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Outcomes with the given action
    pub fn with_action(&self, action: CleanupAction) -> impl Iterator<Item = &UserOutcome> {
        self.outcomes.iter().filter(move |o| o.action == action)
    }
}
