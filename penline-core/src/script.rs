//! Running many command lines at once.
//!
//! A script is nothing more than one command per line. Blank lines are
//! skipped; every other line is executed (or checked) on its own, and a
//! failing line does not stop the lines after it.

use std::fmt;

use crate::error::{ErrorKind, InterpreterError, Severity};
use crate::interpreter::{check, Interpreter};
use crate::surface::Surface;

/// A diagnostic tied to a 1-based script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    pub line: usize,
    pub error: InterpreterError,
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error.message)
    }
}

/// Summary of a script run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptReport {
    /// Lines that were accepted.
    pub accepted: usize,
    /// Rejected lines, plus informational notes about pen and fill changes.
    pub diagnostics: Vec<LineDiagnostic>,
}

impl ScriptReport {
    /// Rejected lines only.
    pub fn errors(&self) -> impl Iterator<Item = &LineDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.error.severity == Severity::Error)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    fn push(&mut self, line: usize, error: InterpreterError) {
        self.diagnostics.push(LineDiagnostic { line, error });
    }
}

/// Numbered, non-blank lines of `source`.
fn command_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    numbered(source.lines()).filter(|(_, line)| !line.trim().is_empty())
}

fn numbered<'a>(
    lines: impl IntoIterator<Item = &'a str>,
) -> impl Iterator<Item = (usize, &'a str)> {
    lines.into_iter().enumerate().map(|(i, line)| (i + 1, line))
}

/// Execute every line of `source`.
///
/// Pen and fill changes are reported as [`Severity::Info`] diagnostics so a
/// host can tell the user about them.
pub fn run_script<S: Surface>(interp: &mut Interpreter<S>, source: &str) -> ScriptReport {
    run_numbered(interp, command_lines(source))
}

/// Execute each of `commands` as exactly one line, numbered from 1.
///
/// Unlike [`run_script`], nothing is skipped: an empty command is rejected.
pub fn run_commands<'a, S: Surface>(
    interp: &mut Interpreter<S>,
    commands: impl IntoIterator<Item = &'a str>,
) -> ScriptReport {
    run_numbered(interp, numbered(commands))
}

fn run_numbered<'a, S: Surface>(
    interp: &mut Interpreter<S>,
    lines: impl Iterator<Item = (usize, &'a str)>,
) -> ScriptReport {
    let mut report = ScriptReport::default();
    for (line, text) in lines {
        match interp.execute(text) {
            Ok(outcome) => {
                report.accepted += 1;
                if outcome.change.is_mode_change() {
                    // Not an error; the diagnostic channel carries the note.
                    let note = InterpreterError::new(ErrorKind::Internal, outcome.to_string())
                        .with_severity(Severity::Info);
                    report.push(line, note);
                }
            }
            Err(error) => report.push(line, error),
        }
    }
    tracing::debug!(
        accepted = report.accepted,
        rejected = report.errors().count(),
        "script executed"
    );
    report
}

/// Validate every line of `source` without executing anything.
#[must_use]
pub fn check_script(source: &str) -> ScriptReport {
    check_numbered(command_lines(source))
}

/// Validate each of `commands` as exactly one line.
#[must_use]
pub fn check_commands<'a>(commands: impl IntoIterator<Item = &'a str>) -> ScriptReport {
    check_numbered(numbered(commands))
}

fn check_numbered<'a>(lines: impl Iterator<Item = (usize, &'a str)>) -> ScriptReport {
    let mut report = ScriptReport::default();
    for (line, text) in lines {
        match check(text) {
            Ok(_) => report.accepted += 1,
            Err(error) => report.push(line, error),
        }
    }
    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
