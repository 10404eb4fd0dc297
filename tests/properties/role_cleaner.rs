//! Property tests for RoleCleaner eligibility and counting.

use proptest::prelude::*;

use single_role_delete::{
    CleanupAction, CleanupOptions, InMemoryUserDirectory, RoleCleaner, UserAccount, UserId,
};

const ROLES: &[&str] = &["subscriber", "editor", "author", "administrator"];

fn role_set() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::collection::vec(proptest::sample::select(ROLES), 0..=3)
}

/// Accounts with unique ids and random role sets
fn accounts() -> impl Strategy<Value = Vec<UserAccount>> {
    proptest::collection::vec(role_set(), 0..=12).prop_map(|sets| {
        sets.into_iter()
            .enumerate()
            .map(|(i, roles)| UserAccount::new(i as u64 + 1, format!("user-{}", i)).with_roles(roles))
            .collect()
    })
}

fn eligible_ids(accounts: &[UserAccount], role: &str) -> Vec<UserId> {
    accounts
        .iter()
        .filter(|a| a.roles().len() == 1 && a.roles()[0] == role)
        .map(UserAccount::id)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: live runs delete exactly the single-role accounts, in order.
    #[test]
    fn property_live_run_deletes_only_single_role_accounts(
        users in accounts(),
        role in proptest::sample::select(ROLES),
    ) {
        let expected = eligible_ids(&users, role);
        let cleaner = RoleCleaner::new(InMemoryUserDirectory::with_users(users.clone()));

        let result = cleaner.execute(&CleanupOptions::new().with_role(role)).unwrap();

        prop_assert_eq!(cleaner.directory().deleted_ids(), expected.clone());
        prop_assert_eq!(result.processed_count(), expected.len());
        prop_assert_eq!(cleaner.directory().len(), users.len() - expected.len());
    }

    /// PROPERTY: dry runs never delete and count the same accounts.
    #[test]
    fn property_dry_run_never_deletes(
        users in accounts(),
        role in proptest::sample::select(ROLES),
    ) {
        let expected = eligible_ids(&users, role);
        let cleaner = RoleCleaner::new(InMemoryUserDirectory::with_users(users));
        let options = CleanupOptions::new().with_role(role).with_dry_run(true);

        let first = cleaner.execute(&options).unwrap();
        let second = cleaner.execute(&options).unwrap();

        prop_assert!(cleaner.directory().deleted_ids().is_empty());
        prop_assert_eq!(first.processed_count(), expected.len());
        prop_assert_eq!(&first, &second);
    }

    /// PROPERTY: processed count equals the number of action records.
    #[test]
    fn property_count_matches_outcomes(
        users in accounts(),
        dry_run in any::<bool>(),
    ) {
        let cleaner = RoleCleaner::new(InMemoryUserDirectory::with_users(users));

        let result = cleaner
            .execute(&CleanupOptions::new().with_dry_run(dry_run))
            .unwrap();

        let acted = result.with_action(CleanupAction::WouldDelete).count()
            + result.with_action(CleanupAction::Deleted).count();
        prop_assert_eq!(result.processed_count(), acted);
    }
}
