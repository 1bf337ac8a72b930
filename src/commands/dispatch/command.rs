//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::resolve_cli_path;
use crate::cli::Cli;
use crate::commands::dispatch::macros::trace_command;
use bertha_core::config::MarkingConfig;
use bertha_core::error::Result;
use bertha_core::rubric::{Rubric, RubricDefinition};
use bertha_core::session::MarkingSession;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Load the marking config, applying `--rubric` and `--state` overrides
    pub fn config(&self) -> Result<MarkingConfig> {
        let explicit = self.cli.config.as_deref().map(resolve_cli_path);
        let mut config = MarkingConfig::discover(self.root, explicit.as_deref())?;

        if let Some(rubric) = &self.cli.rubric {
            config.rubric = resolve_cli_path(rubric);
        }
        if let Some(state) = &self.cli.state {
            config.state_file = resolve_cli_path(state);
        }

        trace_command!(self.cli, self.start, "load_config");
        Ok(config)
    }

    /// Decode and build the rubric named by `config`
    pub fn load_rubric(&self, config: &MarkingConfig) -> Result<Rubric> {
        let definition = RubricDefinition::load(&config.rubric)?;
        let rubric = Rubric::build(&definition)?;
        trace_command!(self.cli, self.start, "load_rubric");
        Ok(rubric)
    }

    /// Start a marking session over the submission root
    pub fn open_session(&self, config: &MarkingConfig) -> Result<MarkingSession> {
        let session = MarkingSession::initialize(self.root, &config.state_file)?
            .with_feedback_extension(config.feedback_extension.clone());
        trace_command!(self.cli, self.start, "open_session");
        Ok(session)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("bertha {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A rubric marking assistant for student submissions.");
        println!();
        println!("Run `bertha --help` for usage information.");
        Ok(())
    }
}
