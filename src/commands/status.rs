//! `bertha status` command - show marking progress
//!
//! Reports how many submissions are marked and which one `mark` would open
//! next. Does not need the rubric.

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use bertha_core::error::Result;

/// JSON shape of `bertha status`
#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    assignment: &'a str,
    root: String,
    state_file: String,
    total: usize,
    marked: usize,
    next: Option<&'a str>,
    complete: bool,
}

/// Execute the status command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.config()?;
    let session = ctx.open_session(&config)?;
    let progress = session.progress();

    match ctx.cli.format {
        OutputFormat::Json => {
            let report = StatusReport {
                assignment: &config.assignment,
                root: session.root().display().to_string(),
                state_file: config.state_file.display().to_string(),
                total: progress.total,
                marked: progress.marked,
                next: session.next_unmarked(),
                complete: session.is_complete(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("{}", config.assignment);
            if !ctx.cli.quiet {
                println!("root: {}", session.root().display());
                println!("state: {}", config.state_file.display());
            }
            println!("marked: {}/{}", progress.marked, progress.total);
            match session.next_unmarked() {
                Some(id) => println!("next: {}", id),
                None => println!("all submissions marked"),
            }
        }
    }

    Ok(())
}
