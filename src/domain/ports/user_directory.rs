//! UserDirectory port - abstraction over the system of record for accounts
//!
//! The directory is owned by the host platform. This crate only queries it
//! and, in live mode, deletes accounts by identifier.

use thiserror::Error;

use crate::domain::entities::UserAccount;
use crate::domain::value_objects::{RoleName, UserId};

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory operation errors
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory cannot be reached
    #[error("user directory unavailable: {0}")]
    Unavailable(String),

    /// The directory's data could not be understood
    #[error("malformed user directory: {0}")]
    Malformed(String),

    /// No account with this identifier
    #[error("no user with id {0}")]
    NotFound(UserId),

    /// Deletion was refused by the directory
    #[error("deletion refused: {0}")]
    Refused(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstract user directory
///
/// Implementations:
/// - `TomlUserDirectory` - accounts stored in a TOML file
/// - `InMemoryUserDirectory` - in-memory, for tests and embedding
pub trait UserDirectory {
    /// All accounts whose role set contains `role`, in directory order
    fn query_users_by_role(&self, role: &RoleName) -> DirectoryResult<Vec<UserAccount>>;

    /// Remove one account
    fn delete_user(&self, id: UserId) -> DirectoryResult<()>;
}

impl<D: UserDirectory + ?Sized> UserDirectory for &D {
    fn query_users_by_role(&self, role: &RoleName) -> DirectoryResult<Vec<UserAccount>> {
        (**self).query_users_by_role(role)
    }

    fn delete_user(&self, id: UserId) -> DirectoryResult<()> {
        (**self).delete_user(id)
    }
}
