//! Error types for the command interpreter.

use std::fmt;

use crate::token::Span;

// ---------------------------------------------------------------------------
// Error severity
// ---------------------------------------------------------------------------

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational message about a command that ran.
    Info,
    /// Error (the command was rejected; the interpreter keeps going).
    Error,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// An error produced while checking or executing a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
    /// Location of the offending token in the line, if known.
    pub span: Option<Span>,
    /// Severity.
    pub severity: Severity,
}

impl InterpreterError {
    /// Create a new error.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span: None,
            severity: Severity::Error,
        }
    }

    /// Attach a source span.
    #[must_use]
    pub const fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Set severity.
    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(span) = self.span {
            write!(f, "[{}..{}] ", span.start, span.end)?;
        }
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for InterpreterError {}

// ---------------------------------------------------------------------------
// Error kinds
// ---------------------------------------------------------------------------

/// Categories of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The verb matches no command.
    UnknownCommand,
    /// The verb is known but the argument count or an argument is wrong.
    InvalidArguments,
    /// Internal error (should not happen).
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand => write!(f, "unknown command"),
            Self::InvalidArguments => write!(f, "invalid arguments"),
            Self::Internal => write!(f, "internal error"),
        }
    }
}

/// Convenience type alias for results using [`InterpreterError`].
pub type InterpResult<T> = Result<T, InterpreterError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = InterpreterError::new(ErrorKind::InvalidArguments, "`x` is not an integer")
            .with_span(Span::new(7, 8));
        let s = format!("{err}");
        assert!(s.contains("[7..8]"), "missing span: {s}");
        assert!(s.contains("`x` is not an integer"), "missing message: {s}");
    }

    #[test]
    fn error_without_span() {
        let err = InterpreterError::new(ErrorKind::UnknownCommand, "unknown command `jump`");
        let s = format!("{err}");
        assert!(!s.contains('['), "should not have span: {s}");
        assert_eq!(err.severity, Severity::Error);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ErrorKind::UnknownCommand.to_string(), "unknown command");
        assert_eq!(ErrorKind::InvalidArguments.to_string(), "invalid arguments");
    }
}
