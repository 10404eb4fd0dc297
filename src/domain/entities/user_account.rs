//! User account entity
//!
//! A transient query result owned by the user directory. The cleaner only
//! reads it and, in live mode, deletes by identifier.

use crate::domain::value_objects::{RoleName, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    id: UserId,
    display_name: String,
    roles: Vec<RoleName>,
}

impl UserAccount {
    pub fn new(id: impl Into<UserId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            roles: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<RoleName>) -> Self {
        self.roles.push(role.into());
        self
    }

    pub fn with_roles<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RoleName>,
    {
        self.roles.extend(roles.into_iter().map(Into::into));
        self
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Roles in the order the directory stores them
    pub fn roles(&self) -> &[RoleName] {
        &self.roles
    }

    pub fn has_role(&self, role: &RoleName) -> bool {
        self.roles.contains(role)
    }

    /// The account's only role, if it holds exactly one
    pub fn sole_role(&self) -> Option<&RoleName> {
        match self.roles.as_slice() {
            [role] => Some(role),
            _ => None,
        }
    }
}
