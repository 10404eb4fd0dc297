//! Scenario tests for RoleCleaner over an in-memory directory.

use std::sync::{Arc, Mutex};

use single_role_delete::infrastructure::events::render_event;
use single_role_delete::{
    CleanupAction, CleanupEvent, CleanupEventSink, CleanupOptions, InMemoryUserDirectory,
    RoleCleaner, UserAccount, UserId,
};

/// Sink that renders the text transcript into memory
#[derive(Default)]
struct TranscriptSink {
    lines: Mutex<Vec<String>>,
}

impl TranscriptSink {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl CleanupEventSink for TranscriptSink {
    fn on_event(&self, event: CleanupEvent) {
        self.lines.lock().unwrap().extend(render_event(&event));
    }
}

fn scenario_users() -> Vec<UserAccount> {
    vec![
        UserAccount::new(1, "Ann").with_role("subscriber"),
        UserAccount::new(2, "Bo").with_roles(["subscriber", "editor"]),
        UserAccount::new(3, "Cy").with_role("subscriber"),
    ]
}

#[test]
fn scenario_a_empty_directory() {
    let cleaner = RoleCleaner::new(InMemoryUserDirectory::new());
    let sink = Arc::new(TranscriptSink::default());

    let result = cleaner
        .execute_with_events(&CleanupOptions::new(), sink.clone())
        .unwrap();

    assert_eq!(result.processed_count(), 0);
    let lines = sink.lines();
    let tail = &lines[lines.len() - 2..];
    assert_eq!(
        tail,
        [
            "No users found matching those criteria.",
            "Finished process - 0 user(s) processed.",
        ]
    );
}

#[test]
fn scenario_b_dry_run() {
    let cleaner = RoleCleaner::new(InMemoryUserDirectory::with_users(scenario_users()));

    let result = cleaner
        .execute(&CleanupOptions::new().with_dry_run(true))
        .unwrap();

    assert_eq!(result.processed_count(), 2);
    assert!(result
        .outcomes
        .iter()
        .all(|o| o.action == CleanupAction::WouldDelete));
    assert!(cleaner.directory().deleted_ids().is_empty());
}

#[test]
fn scenario_c_live() {
    let cleaner = RoleCleaner::new(InMemoryUserDirectory::with_users(scenario_users()));

    let result = cleaner.execute(&CleanupOptions::new()).unwrap();

    assert_eq!(result.processed_count(), 2);
    assert!(result
        .outcomes
        .iter()
        .all(|o| o.action == CleanupAction::Deleted));
    assert_eq!(
        cleaner.directory().deleted_ids(),
        vec![UserId::new(1), UserId::new(3)]
    );
}

#[test]
fn scenario_d_partial_failure() {
    let directory = InMemoryUserDirectory::with_users(scenario_users())
        .failing_delete_for(UserId::new(1));
    let cleaner = RoleCleaner::new(directory);
    let sink = Arc::new(TranscriptSink::default());

    let result = cleaner
        .execute_with_events(&CleanupOptions::new(), sink.clone())
        .unwrap();

    assert_eq!(result.processed_count(), 1);
    assert_eq!(result.failed_count(), 1);
    assert_eq!(cleaner.directory().deleted_ids(), vec![UserId::new(3)]);
    assert_eq!(
        single_role_delete::presentation::output::exit_status(&result),
        single_role_delete::presentation::EXIT_PARTIAL_FAILURE
    );
    assert_eq!(
        sink.lines().last().map(String::as_str),
        Some("Finished process - 1 user(s) processed.")
    );
}

#[test]
fn multi_role_users_are_never_deleted_even_with_only_target_roles() {
    let cleaner = RoleCleaner::new(InMemoryUserDirectory::with_users([
        UserAccount::new(5, "Dup").with_roles(["subscriber", "subscriber"]),
    ]));

    let result = cleaner.execute(&CleanupOptions::new()).unwrap();

    assert_eq!(result.processed_count(), 0);
    assert_eq!(cleaner.directory().len(), 1);
}
