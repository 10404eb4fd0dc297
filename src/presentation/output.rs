//! Output format and exit status

use std::process::ExitCode;

use crate::application::CleanupResult;

/// Exit status when every step succeeded
pub const EXIT_OK: u8 = 0;
/// Exit status for hard failures (configuration, directory query)
pub const EXIT_FAILURE: u8 = 1;
/// Exit status when one or more deletions failed
pub const EXIT_PARTIAL_FAILURE: u8 = 2;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Exit status for a completed run
pub fn exit_status(result: &CleanupResult) -> u8 {
    if result.is_success() {
        EXIT_OK
    } else {
        EXIT_PARTIAL_FAILURE
    }
}

pub fn exit_code(result: &CleanupResult) -> ExitCode {
    ExitCode::from(exit_status(result))
}
