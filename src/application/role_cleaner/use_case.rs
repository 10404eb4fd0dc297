//! Role Cleaner Use Case
//!
//! Orchestrates one query and one sequential pass over the results.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::ports::{
    CleanupEvent, CleanupEventSink, DirectoryResult, NoopEventSink, UserDirectory,
};
use crate::domain::policies::SingleRolePolicy;
use crate::domain::value_objects::CleanupAction;

use super::options::CleanupOptions;
use super::result::{CleanupResult, FailedDeletion, UserOutcome};

/// Deletes (or reports) accounts whose only role is the target role
pub struct RoleCleaner<D>
where
    D: UserDirectory,
{
    directory: D,
}

impl<D> RoleCleaner<D>
where
    D: UserDirectory,
{
    /// Create a new cleaner over a user directory
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Access the underlying directory
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Execute a run without observing events
    pub fn execute(&self, options: &CleanupOptions) -> DirectoryResult<CleanupResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute a run, reporting progress to `event_sink`
    ///
    /// A failed query aborts the run. A failed deletion is recorded for that
    /// account and the run continues with the next one.
    #[instrument(skip_all, fields(role = %options.role, dry_run = options.dry_run))]
    pub fn execute_with_events(
        &self,
        options: &CleanupOptions,
        event_sink: Arc<dyn CleanupEventSink>,
    ) -> DirectoryResult<CleanupResult> {
        let policy = SingleRolePolicy::new(options.role.clone());

        event_sink.on_event(CleanupEvent::Started {
            role: options.role.clone(),
            dry_run: options.dry_run,
        });

        let accounts = self.directory.query_users_by_role(policy.target())?;
        info!(count = accounts.len(), "queried user directory");

        let mut result = CleanupResult::new();

        if accounts.is_empty() {
            event_sink.on_event(CleanupEvent::NoMatches {
                role: options.role.clone(),
            });
        }

        let action = CleanupAction::for_mode(options.dry_run);

        for account in accounts {
            let eligibility = policy.evaluate(&account);
            if !eligibility.is_eligible() {
                debug!(id = %account.id(), ?eligibility, "skipping account");
                continue;
            }

            if !options.dry_run {
                if let Err(e) = self.directory.delete_user(account.id()) {
                    warn!(id = %account.id(), error = %e, "failed to delete user");
                    event_sink.on_event(CleanupEvent::DeleteFailed {
                        id: account.id(),
                        display_name: account.display_name().to_string(),
                        error: e.to_string(),
                    });
                    result.add_failure(FailedDeletion {
                        id: account.id(),
                        display_name: account.display_name().to_string(),
                        error: e.to_string(),
                    });
                    continue;
                }
            }

            let outcome = UserOutcome {
                id: account.id(),
                display_name: account.display_name().to_string(),
                role: policy.target().clone(),
                action,
            };
            event_sink.on_event(CleanupEvent::UserProcessed {
                id: outcome.id,
                display_name: outcome.display_name.clone(),
                role: outcome.role.clone(),
                action,
            });
            result.add_outcome(outcome);
        }

        event_sink.on_event(CleanupEvent::Finished {
            dry_run: options.dry_run,
            processed: result.processed_count(),
            failed: result.failed_count(),
        });

        Ok(result)
    }
}
