//! User Directory Implementations

mod memory;
mod toml_directory;

pub use memory::InMemoryUserDirectory;
pub use toml_directory::{parse_users, TomlUserDirectory, DEFAULT_USERS_FILE};
