//! TOML User Directory
//!
//! Implements the UserDirectory port over a TOML file:
//!
//! ```toml
//! [[users]]
//! id = 1
//! display_name = "Alice"
//! roles = ["subscriber"]
//! ```
//!
//! Every call re-reads the file. Deletion rewrites it atomically and keeps
//! the remaining entries (including fields this crate does not know) in order.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::UserAccount;
use crate::domain::ports::{DirectoryError, DirectoryResult, UserDirectory};
use crate::domain::value_objects::{RoleName, UserId};

/// Default file name when none is configured
pub const DEFAULT_USERS_FILE: &str = "users.toml";

/// TOML representation of one account
#[derive(Debug, Clone, Deserialize)]
struct TomlUserEntry {
    id: u64,
    display_name: String,
    #[serde(default)]
    roles: Vec<String>,
}

/// TOML representation of the users file
#[derive(Debug, Clone, Deserialize)]
struct TomlUsersFile {
    #[serde(default)]
    users: Vec<TomlUserEntry>,
}

/// Parse and validate the content of a users file
pub fn parse_users(content: &str) -> DirectoryResult<Vec<UserAccount>> {
    let file: TomlUsersFile =
        toml::from_str(content).map_err(|e| DirectoryError::Malformed(e.to_string()))?;

    let mut seen = HashSet::new();
    for entry in &file.users {
        if !seen.insert(entry.id) {
            return Err(DirectoryError::Malformed(format!(
                "duplicate user id {}",
                entry.id
            )));
        }
    }

    // Blank role strings are dropped rather than normalized to the default.
    Ok(file
        .users
        .into_iter()
        .map(|entry| {
            UserAccount::new(entry.id, entry.display_name)
                .with_roles(entry.roles.into_iter().filter(|role| !role.trim().is_empty()))
        })
        .collect())
}

/// File-backed user directory
#[derive(Debug, Clone)]
pub struct TomlUserDirectory {
    path: PathBuf,
}

impl TomlUserDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> DirectoryResult<String> {
        if !self.path.exists() {
            return Err(DirectoryError::Unavailable(format!(
                "users file not found: {}",
                self.path.display()
            )));
        }
        Ok(std::fs::read_to_string(&self.path)?)
    }

    /// Load and validate every account in the file
    pub fn load(&self) -> DirectoryResult<Vec<UserAccount>> {
        let users = parse_users(&self.read()?)?;
        debug!(path = %self.path.display(), count = users.len(), "loaded users file");
        Ok(users)
    }

    fn write_atomic(&self, content: &str) -> DirectoryResult<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| DirectoryError::Io(e.error))?;
        Ok(())
    }
}

impl UserDirectory for TomlUserDirectory {
    fn query_users_by_role(&self, role: &RoleName) -> DirectoryResult<Vec<UserAccount>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|account| account.has_role(role))
            .collect())
    }

    fn delete_user(&self, id: UserId) -> DirectoryResult<()> {
        // Validate first so a malformed file is never rewritten.
        self.load()?;

        let content = self.read()?;
        let mut doc: toml::Table = content
            .parse()
            .map_err(|e: toml::de::Error| DirectoryError::Malformed(e.to_string()))?;

        let users = doc
            .get_mut("users")
            .and_then(toml::Value::as_array_mut)
            .ok_or(DirectoryError::NotFound(id))?;

        let before = users.len();
        users.retain(|entry| {
            entry
                .get("id")
                .and_then(toml::Value::as_integer)
                .and_then(|raw| u64::try_from(raw).ok())
                != Some(id.get())
        });
        if users.len() == before {
            return Err(DirectoryError::NotFound(id));
        }

        let rendered =
            toml::to_string_pretty(&doc).map_err(|e| DirectoryError::Malformed(e.to_string()))?;
        self.write_atomic(&rendered)?;

        debug!(%id, path = %self.path.display(), "deleted user");
        Ok(())
    }
}
