//! Command implementations for all bertha commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{mark, rubric, status};
use bertha_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Status => status::execute(ctx),
            Commands::Rubric => rubric::execute(ctx),
            Commands::Mark(args) => mark::execute(ctx, args),
        }
    }
}
