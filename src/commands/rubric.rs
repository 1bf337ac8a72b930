//! `bertha rubric` command - validate and print the rubric

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use bertha_core::error::Result;
use bertha_core::rubric::format_breakdown;

/// Execute the rubric command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.config()?;
    let rubric = ctx.load_rubric(&config)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": config.rubric.display().to_string(),
                "sections": rubric.sections(),
                "total": rubric.score(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", format_breakdown(&rubric));
        }
    }

    Ok(())
}
