//! In-memory User Directory
//!
//! Holds accounts in a vector and records every deletion. Failures can be
//! injected per account or for the whole directory.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use crate::domain::entities::UserAccount;
use crate::domain::ports::{DirectoryError, DirectoryResult, UserDirectory};
use crate::domain::value_objects::{RoleName, UserId};

#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: Mutex<Vec<UserAccount>>,
    deleted: Mutex<Vec<UserId>>,
    failing: HashSet<UserId>,
    unavailable: bool,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = UserAccount>) -> Self {
        Self {
            users: Mutex::new(users.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Make `delete_user` fail for this account
    pub fn failing_delete_for(mut self, id: UserId) -> Self {
        self.failing.insert(id);
        self
    }

    /// Make every query fail as if the directory were unreachable
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Ids passed to successful `delete_user` calls, in call order
    pub fn deleted_ids(&self) -> Vec<UserId> {
        self.deleted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Accounts still present
    pub fn users(&self) -> Vec<UserAccount> {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|u| u.id() == id)
    }

    pub fn len(&self) -> usize {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn query_users_by_role(&self, role: &RoleName) -> DirectoryResult<Vec<UserAccount>> {
        if self.unavailable {
            return Err(DirectoryError::Unavailable(
                "in-memory directory marked unavailable".to_string(),
            ));
        }

        let users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(users.iter().filter(|u| u.has_role(role)).cloned().collect())
    }

    fn delete_user(&self, id: UserId) -> DirectoryResult<()> {
        if self.failing.contains(&id) {
            return Err(DirectoryError::Refused(format!("user {} is protected", id)));
        }

        let mut users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        let index = users
            .iter()
            .position(|u| u.id() == id)
            .ok_or(DirectoryError::NotFound(id))?;
        users.remove(index);

        self.deleted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(id);
        Ok(())
    }
}
