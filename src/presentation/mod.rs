//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output format selection and exit status
//! - Diagnostics logging setup
//!
//! ## Usage
//!
//! ```ignore
//! use single_role_delete::presentation::factory;
//!
//! let cleaner = factory::create_role_cleaner("users.toml");
//! let result = cleaner.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use cli::Cli;
pub use factory::{create_event_sink, create_role_cleaner};
pub use output::{exit_code, OutputFormat, EXIT_FAILURE, EXIT_PARTIAL_FAILURE};
