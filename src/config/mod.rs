//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SRD_*)
//! 3. `--config <file>` or `./single-role-delete.toml`
//! 4. User config (~/.config/single-role-delete/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, discover, load_layered, with_env_overrides, ConfigWarning, LoadedConfig,
    ENV_ROLE, ENV_USERS_FILE, ENV_VERBOSITY, PROJECT_CONFIG_FILE,
};
pub use types::{Config, DefaultsConfig, DirectoryConfig, OutputConfig, Verbosity};
