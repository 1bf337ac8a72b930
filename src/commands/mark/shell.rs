//! Line-oriented marking shell
//!
//! Reads one command per line and applies it to the session and rubric.
//! Errors from a single command are printed and the shell keeps going; only
//! failures the session cannot continue from end the loop.

use std::io::{BufRead, Write};
use std::str::FromStr;

use bertha_core::bail_usage;
use bertha_core::error::{BerthaError, Result};
use bertha_core::rubric::{format_breakdown, format_summary, CriterionRef, Rubric};
use bertha_core::session::{AdvanceOutcome, MarkingSession};

const HELP: &str = "\
Commands:
  next, n              move to the next unmarked submission (resets marks)
  skip                 mark the current submission without feedback and move on
  save                 write feedback for the current submission and mark it
  view                 open the current submission again
  deduct S.C, - S.C    take a deduction on criterion C of section S
  reset [S | S.C]      restore full marks for everything, a section, or a criterion
  comment TEXT, c TEXT add a line to the general comments
  clear-comments       drop all comments
  show                 print the rubric with current deductions
  status               print the current submission and progress
  help                 print this help
  quit, q              leave the shell";

/// What `reset` applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetTarget {
    All,
    Section(usize),
    Criterion(CriterionRef),
}

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Next,
    Skip,
    Save,
    View,
    Deduct(CriterionRef),
    Reset(ResetTarget),
    Comment(String),
    ClearComments,
    Show,
    Status,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = BerthaError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let no_args = |cmd: ShellCommand| {
            if rest.is_empty() {
                Ok(cmd)
            } else {
                Err(BerthaError::UsageError(format!(
                    "`{}` takes no arguments",
                    verb
                )))
            }
        };

        match verb {
            "next" | "n" => no_args(ShellCommand::Next),
            "skip" => no_args(ShellCommand::Skip),
            "save" => no_args(ShellCommand::Save),
            "view" => no_args(ShellCommand::View),
            "deduct" | "d" | "-" => {
                if rest.is_empty() {
                    bail_usage!("usage: deduct SECTION.CRITERION");
                }
                Ok(ShellCommand::Deduct(rest.parse()?))
            }
            "reset" | "r" => Ok(ShellCommand::Reset(parse_reset_target(rest)?)),
            "comment" | "c" => {
                if rest.is_empty() {
                    bail_usage!("usage: comment TEXT");
                }
                Ok(ShellCommand::Comment(rest.to_string()))
            }
            "clear-comments" => no_args(ShellCommand::ClearComments),
            "show" => no_args(ShellCommand::Show),
            "status" => no_args(ShellCommand::Status),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "q" | "exit" => Ok(ShellCommand::Quit),
            other => Err(BerthaError::UsageError(format!(
                "unknown command '{}' (type `help` for commands)",
                other
            ))),
        }
    }
}

fn parse_reset_target(arg: &str) -> Result<ResetTarget> {
    if arg.is_empty() {
        return Ok(ResetTarget::All);
    }
    if arg.contains('.') {
        return Ok(ResetTarget::Criterion(arg.parse()?));
    }
    match arg.parse::<usize>() {
        Ok(section) if section > 0 => Ok(ResetTarget::Section(section - 1)),
        _ => Err(BerthaError::UsageError(format!(
            "invalid reset target '{}' (expected SECTION or SECTION.CRITERION)",
            arg
        ))),
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Interactive marking loop over one session and rubric
pub struct Shell<W: Write> {
    assignment: String,
    session: MarkingSession,
    rubric: Rubric,
    comments: Vec<String>,
    out: W,
    prompt: bool,
}

impl<W: Write> Shell<W> {
    pub fn new(assignment: &str, session: MarkingSession, rubric: Rubric, out: W) -> Self {
        Self {
            assignment: assignment.to_string(),
            session,
            rubric,
            comments: Vec::new(),
            out,
            prompt: false,
        }
    }

    /// Print a `> ` prompt before reading each line
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    #[cfg(test)]
    pub fn session(&self) -> &MarkingSession {
        &self.session
    }

    #[cfg(test)]
    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    #[cfg(test)]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands from `input` until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        self.print_banner()?;

        let mut buf = Vec::new();
        loop {
            if self.prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // A garbled line is reported like any other bad command
            let Ok(line) = std::str::from_utf8(&buf) else {
                writeln!(self.out, "error: input line is not valid UTF-8, ignored")?;
                continue;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<ShellCommand>().and_then(|cmd| self.apply(cmd)) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) if e.is_recoverable() => writeln!(self.out, "error: {}", e)?,
                Err(e) => return Err(e),
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn apply(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::Next => {
                let outcome = self.session.advance();
                self.reset_marks();
                self.print_outcome(&outcome)?;
            }
            ShellCommand::Skip => {
                let outcome = self.session.skip_current()?;
                self.reset_marks();
                self.print_outcome(&outcome)?;
            }
            ShellCommand::Save => self.save()?,
            ShellCommand::View => {
                self.session.view_current()?;
                if let Some(id) = self.session.current() {
                    writeln!(self.out, "opened {}", id)?;
                }
            }
            ShellCommand::Deduct(at) => {
                self.rubric.apply_deduction(at)?;
                self.print_criterion(at)?;
            }
            ShellCommand::Reset(target) => self.reset(target)?,
            ShellCommand::Comment(text) => self.comments.push(text),
            ShellCommand::ClearComments => self.comments.clear(),
            ShellCommand::Show => self.print_breakdown()?,
            ShellCommand::Status => self.print_status()?,
            ShellCommand::Help => writeln!(self.out, "{}", HELP)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> Result<()> {
        let summary = format_summary(&self.rubric, &self.comments.join("\n"));
        let path = self.session.commit_current(&summary)?;
        writeln!(self.out, "saved {}", path.display())?;
        self.print_status()
    }

    fn reset(&mut self, target: ResetTarget) -> Result<()> {
        match target {
            ResetTarget::All => {
                self.reset_marks();
                writeln!(self.out, "all marks reset")?;
            }
            ResetTarget::Section(index) => {
                let line = self.rubric.reset_section(index)?.to_string();
                writeln!(self.out, "{}", line)?;
            }
            ResetTarget::Criterion(at) => {
                self.rubric.reset_criterion(at)?;
                self.print_criterion(at)?;
            }
        }
        Ok(())
    }

    /// Full marks and no comments, as for a fresh submission
    fn reset_marks(&mut self) {
        self.rubric.reset();
        self.comments.clear();
    }

    fn print_banner(&mut self) -> Result<()> {
        let progress = self.session.progress();
        writeln!(
            self.out,
            "{}: {}/{} marked. Type `help` for commands.",
            self.assignment, progress.marked, progress.total
        )?;
        Ok(())
    }

    fn print_outcome(&mut self, outcome: &AdvanceOutcome) -> Result<()> {
        match outcome {
            AdvanceOutcome::Selected(_) => self.print_status(),
            AdvanceOutcome::AlreadyComplete => {
                writeln!(self.out, "All submissions are marked.")?;
                Ok(())
            }
        }
    }

    fn print_status(&mut self) -> Result<()> {
        let current = self
            .session
            .current()
            .unwrap_or("No current submission")
            .to_string();
        let position = self.session.position();
        let marked = self.session.is_current_marked();
        writeln!(self.out, "[{}] {} marked: {}", position, current, marked)?;
        Ok(())
    }

    fn print_criterion(&mut self, at: CriterionRef) -> Result<()> {
        let Some(criterion) = self.rubric.criterion(at) else {
            return Ok(());
        };
        let mut line = format!("{} {} {}", at, criterion.description(), criterion);
        if let Some(lives) = criterion.remaining_lives() {
            line.push_str(&format!(" lives={}", lives));
        }
        if let Some(score) = self.rubric.section_score(at.section) {
            line.push_str(&format!(" | section {}", score));
        }
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn print_breakdown(&mut self) -> Result<()> {
        let text = format_breakdown(&self.rubric);
        writeln!(self.out, "{}", text)?;
        if self.comments.is_empty() {
            writeln!(self.out, "Comments: (none)")?;
        } else {
            writeln!(self.out, "Comments:")?;
            for comment in &self.comments {
                writeln!(self.out, "  {}", comment)?;
            }
        }
        Ok(())
    }
}
