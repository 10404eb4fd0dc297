//! Text Event Sink
//!
//! Renders cleanup events as the line-oriented transcript operators and
//! scripts already match against. Wording (including the double space after
//! `User`) is kept byte-for-byte.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{CleanupEvent, CleanupEventSink};

pub const DRY_RUN_BANNER: &str = "===Dry Run===";
pub const LIVE_BANNER: &str = "Doing it live!";
pub const STARTING_LINE: &str = "Starting process";
pub const NO_MATCHES_LINE: &str = "No users found matching those criteria.";

/// Render the stdout lines for one event
pub fn render_event(event: &CleanupEvent) -> Vec<String> {
    match event {
        CleanupEvent::Started { dry_run, .. } => {
            let banner = if *dry_run { DRY_RUN_BANNER } else { LIVE_BANNER };
            vec![banner.to_string(), STARTING_LINE.to_string()]
        }
        CleanupEvent::NoMatches { .. } => vec![NO_MATCHES_LINE.to_string()],
        CleanupEvent::UserProcessed {
            display_name,
            role,
            action,
            ..
        } => vec![format!(
            "User  {} with role {} {}.",
            display_name,
            role,
            action.verb_phrase()
        )],
        CleanupEvent::DeleteFailed { .. } => Vec::new(),
        CleanupEvent::Finished { processed, .. } => {
            vec![format!("Finished process - {} user(s) processed.", processed)]
        }
    }
}

/// Render the stderr line for a failed deletion
pub fn render_failure(event: &CleanupEvent) -> Option<String> {
    match event {
        CleanupEvent::DeleteFailed {
            id,
            display_name,
            error,
        } => Some(format!(
            "Error: failed to delete user {} ({}): {}",
            display_name, id, error
        )),
        _ => None,
    }
}

/// Event sink that writes the plain-text transcript
pub struct TextEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl TextEventSink {
    /// Create a sink writing to stdout and stderr
    pub fn stdio() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    /// Create a sink writing to custom writers (for testing)
    pub fn with_writers<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }
}

impl CleanupEventSink for TextEventSink {
    fn on_event(&self, event: CleanupEvent) {
        if let Some(line) = render_failure(&event) {
            if let Ok(mut err) = self.err.lock() {
                let _ = writeln!(err, "{}", line);
                let _ = err.flush();
            }
        }

        let lines = render_event(&event);
        if lines.is_empty() {
            return;
        }
        if let Ok(mut out) = self.out.lock() {
            for line in lines {
                let _ = writeln!(out, "{}", line);
            }
            let _ = out.flush();
        }
    }
}
