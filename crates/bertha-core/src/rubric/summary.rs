//! Text reports generated from a rubric

use std::fmt::Write;

use super::Rubric;

const CRITERION_INDENT: &str = "    ";

/// Build the feedback summary saved alongside a submission.
///
/// One `<name>: <current>/<max>` line per section in rubric order, then a
/// `General Comments: <comments>` line. Lines are joined with `\n` and there
/// is no trailing newline beyond whatever `comments` carries.
pub fn format_summary(rubric: &Rubric, comments: &str) -> String {
    let mut lines: Vec<String> = rubric
        .sections()
        .iter()
        .map(|section| format!("{}: {}", section.name(), section.score()))
        .collect();
    lines.push(format!("General Comments: {}", comments));
    lines.join("\n")
}

/// Per-criterion breakdown of the current deduction state
pub fn format_breakdown(rubric: &Rubric) -> String {
    let mut out = String::new();
    for (s_idx, section) in rubric.sections().iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", s_idx + 1, section);
        for (c_idx, criterion) in section.criteria().iter().enumerate() {
            let _ = write!(
                out,
                "{}{}.{} {} {}",
                CRITERION_INDENT,
                s_idx + 1,
                c_idx + 1,
                criterion.description(),
                criterion
            );
            if let Some(lives) = criterion.remaining_lives() {
                let _ = write!(out, " lives={}", lives);
            }
            out.push('\n');
        }
    }
    let total = rubric.score();
    let _ = write!(out, "Total: {}", total);
    out
}
