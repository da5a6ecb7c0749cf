//! The command interpreter.
//!
//! An [`Interpreter`] owns a surface and the [`DrawingState`] and has two
//! entry points:
//! - [`Interpreter::execute`] validates a line, paints it, and updates the
//!   state
//! - [`Interpreter::check`] (and the free [`check`]) only validates
//!
//! Both go through [`Command::parse`], so they accept exactly the same
//! lines. Execution plans the whole command before touching anything: a
//! rejected line leaves the state and the surface as they were.

use std::fmt;

use penline_graphics::Canvas;

use crate::command::Command;
use crate::error::InterpResult;
use crate::geometry::{plan, Change};
use crate::state::DrawingState;
use crate::surface::Surface;

/// Callback invoked after every executed line so the host can repaint.
pub type RefreshHook = Box<dyn FnMut()>;

/// Result of a successfully executed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// The command that ran.
    pub command: Command,
    /// Drawing state after the command.
    pub state: DrawingState,
    /// What the command changed.
    pub change: Change,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.change.fmt(f)
    }
}

/// Validate a line without executing it.
///
/// # Errors
///
/// Exactly the errors [`Interpreter::execute`] would report for `line`.
pub fn check(line: &str) -> InterpResult<Command> {
    let result = Command::parse(line);
    match &result {
        Ok(command) => tracing::debug!(%command, "checked"),
        Err(err) => tracing::debug!(kind = %err.kind, "check rejected: {}", err.message),
    }
    result
}

// ---------------------------------------------------------------------------
// Interpreter
// ---------------------------------------------------------------------------

/// Interprets command lines against one surface and one drawing state.
pub struct Interpreter<S = Canvas> {
    surface: S,
    state: DrawingState,
    refresh: Option<RefreshHook>,
}

impl<S: Surface> Interpreter<S> {
    /// Create an interpreter with the default state: black pen, fill off,
    /// at the origin.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_state(surface, DrawingState::default())
    }

    /// Create an interpreter that starts from `state`.
    #[must_use]
    pub const fn with_state(surface: S, state: DrawingState) -> Self {
        Self {
            surface,
            state,
            refresh: None,
        }
    }

    /// Register the host's repaint callback.
    pub fn set_refresh_hook(&mut self, hook: RefreshHook) {
        self.refresh = Some(hook);
    }

    #[must_use]
    pub const fn state(&self) -> DrawingState {
        self.state
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Give the surface back to the host.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Validate and run one command line.
    ///
    /// The refresh hook runs afterwards whether or not the line was
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns the validation error for a rejected line; the state and
    /// surface are then unchanged.
    pub fn execute(&mut self, line: &str) -> InterpResult<Outcome> {
        let result = self.run(line);
        if let Some(refresh) = self.refresh.as_mut() {
            refresh();
        }
        result
    }

    /// Validate a line without executing it. Never paints, never changes
    /// the state, never calls the refresh hook.
    ///
    /// # Errors
    ///
    /// See [`check`].
    #[expect(
        clippy::unused_self,
        reason = "validation needs no interpreter state; the method mirrors `execute`"
    )]
    pub fn check(&self, line: &str) -> InterpResult<Command> {
        check(line)
    }

    fn run(&mut self, line: &str) -> InterpResult<Outcome> {
        let command = Command::parse(line).inspect_err(|err| {
            tracing::debug!(kind = %err.kind, "rejected: {}", err.message);
        })?;

        let plan = plan(command, self.state);
        for op in &plan.ops {
            op.apply(&mut self.surface);
        }
        self.state = plan.next;

        tracing::debug!(
            %command,
            position = %self.state.position,
            pen = %self.state.pen,
            fill = self.state.fill,
            "executed"
        );

        Ok(Outcome {
            command,
            state: self.state,
            change: plan.change,
        })
    }
}

impl<S: Surface + Default> Default for Interpreter<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: fmt::Debug> fmt::Debug for Interpreter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("surface", &self.surface)
            .field("state", &self.state)
            .field("refresh", &self.refresh.is_some())
            .finish()
    }
}
