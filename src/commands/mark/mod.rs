//! `bertha mark` command - interactive marking shell
//!
//! Opens the session, picks a viewer for submissions and hands stdin to the
//! shell. The prompt is only shown when stdin is a terminal so piped scripts
//! produce clean output.

pub mod shell;


use std::io::{self, IsTerminal};

use tracing::{debug, warn};

use crate::cli::MarkArgs;
use crate::commands::dispatch::CommandContext;
use bertha_core::config::{resolve_editor, GlobalConfig};
use bertha_core::error::Result;
use bertha_core::session::EditorViewer;

pub use shell::Shell;

/// Execute the mark command
pub fn execute(ctx: &CommandContext, args: &MarkArgs) -> Result<()> {
    let config = ctx.config()?;
    let rubric = ctx.load_rubric(&config)?;
    let mut session = ctx.open_session(&config)?;

    if args.no_editor {
        debug!("editor disabled");
    } else {
        let global = GlobalConfig::load()?;
        match resolve_editor(args.editor.as_deref(), &config, &global)? {
            Some(command) => {
                let viewer = EditorViewer::from_command(&command)?;
                debug!(editor = %viewer.program(), "editor_selected");
                session = session.with_viewer(viewer);
            }
            None => warn!("no editor configured, submissions will not be opened"),
        }
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let stdout = io::stdout();

    let mut shell = Shell::new(&config.assignment, session, rubric, stdout.lock())
        .with_prompt(interactive);
    shell.run(stdin.lock())
}
