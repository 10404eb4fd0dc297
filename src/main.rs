//! single-role-delete - delete users that hold exactly one given role
//!
//! Usage: single-role-delete [--dry-run] [--role=<NAME>]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use single_role_delete::application::CleanupOptions;
use single_role_delete::config;
use single_role_delete::domain::value_objects::RoleName;
use single_role_delete::presentation::{
    create_event_sink, create_role_cleaner, exit_code, logging, Cli, OutputFormat, EXIT_FAILURE,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.json);

    match run(cli, format) {
        Ok(code) => code,
        Err(err) => {
            report_error(&err, format);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: Cli, format: OutputFormat) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let loaded = config::load_layered(cli.config.as_deref(), &cwd)
        .context("failed to load configuration")?;

    logging::init_tracing(loaded.config.output.verbosity.raised_by(cli.verbose));

    for w in &loaded.warnings {
        match (&w.line, &w.suggestion) {
            (Some(line), Some(suggestion)) => warn!(
                "unknown config key '{}' in {}:{} (did you mean '{}'?)",
                w.key,
                w.file.display(),
                line,
                suggestion
            ),
            (Some(line), None) => {
                warn!("unknown config key '{}' in {}:{}", w.key, w.file.display(), line)
            }
            _ => warn!("unknown config key '{}' in {}", w.key, w.file.display()),
        }
    }

    let role = cli
        .role
        .filter(|r| !r.trim().is_empty())
        .map(RoleName::new)
        .unwrap_or(loaded.config.defaults.role);
    let users_file = cli.users_file.unwrap_or(loaded.config.directory.users_file);

    let options = CleanupOptions::new()
        .with_role(role)
        .with_dry_run(cli.dry_run);

    let cleaner = create_role_cleaner(&users_file);
    let result = cleaner
        .execute_with_events(&options, create_event_sink(format))
        .with_context(|| format!("failed to query user directory {}", users_file.display()))?;

    Ok(exit_code(&result))
}

fn report_error(err: &anyhow::Error, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "event": "error",
                "command": "single-role-delete",
                "message": format!("{:#}", err),
            })
        ),
        OutputFormat::Text => eprintln!("Error: {:#}", err),
    }
}
