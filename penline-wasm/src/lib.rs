use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use penline_core::error::{InterpreterError, Severity};
use penline_core::script::{run_script, LineDiagnostic, ScriptReport};
use penline_core::Interpreter;
use penline_graphics::Canvas;
use penline_svg::{render_with_options, RenderOptions};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    ok: bool,
    message: String,
}

#[wasm_bindgen]
impl CommandResult {
    #[wasm_bindgen(getter)]
    pub fn ok(&self) -> bool {
        self.ok
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl CommandResult {
    fn accepted(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn rejected(err: &InterpreterError) -> Self {
        Self {
            ok: false,
            message: err.message.clone(),
        }
    }
}

/// One canvas plus the interpreter that draws on it.
///
/// The rendered SVG is cached and rebuilt only after the interpreter asks
/// for a refresh.
#[wasm_bindgen]
pub struct DrawingSession {
    interp: Interpreter<Canvas>,
    dirty: Rc<Cell<bool>>,
    svg: String,
}

#[wasm_bindgen]
impl DrawingSession {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let mut interp = Interpreter::new(Canvas::new(width, height));
        let flag = Rc::clone(&dirty);
        interp.set_refresh_hook(Box::new(move || flag.set(true)));
        Self {
            interp,
            dirty,
            svg: String::new(),
        }
    }

    pub fn execute(&mut self, line: &str) -> CommandResult {
        match self.interp.execute(line) {
            Ok(outcome) => CommandResult::accepted(outcome.to_string()),
            Err(err) => CommandResult::rejected(&err),
        }
    }

    pub fn check(&self, line: &str) -> CommandResult {
        match self.interp.check(line) {
            Ok(command) => CommandResult::accepted(command.to_string()),
            Err(err) => CommandResult::rejected(&err),
        }
    }

    /// Execute every line of `source`; the message lists one diagnostic per
    /// line.
    #[wasm_bindgen(js_name = runScript)]
    pub fn run_script(&mut self, source: &str) -> CommandResult {
        let report = run_script(&mut self.interp, source);
        CommandResult {
            ok: !report.has_errors(),
            message: collect_diagnostics(&report),
        }
    }

    pub fn svg(&mut self) -> String {
        if self.dirty.replace(false) {
            let opts = RenderOptions::default();
            self.svg = render_with_options(self.interp.surface(), &opts).to_string();
        }
        self.svg.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> i32 {
        self.interp.state().position.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> i32 {
        self.interp.state().position.y
    }

    #[wasm_bindgen(getter)]
    pub fn pen(&self) -> String {
        self.interp.state().pen.name().to_owned()
    }

    #[wasm_bindgen(getter)]
    pub fn fill(&self) -> bool {
        self.interp.state().fill
    }
}

impl fmt::Debug for DrawingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawingSession")
            .field("interp", &self.interp)
            .field("dirty", &self.dirty.get())
            .finish_non_exhaustive()
    }
}

fn collect_diagnostics(report: &ScriptReport) -> String {
    report
        .diagnostics
        .iter()
        .map(format_diagnostic)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_diagnostic(diag: &LineDiagnostic) -> String {
    let label = match diag.error.severity {
        Severity::Info => "info",
        Severity::Error => "error",
    };
    format!("{label} {diag}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executes_and_tracks_state() {
        let mut session = DrawingSession::new(100, 100);
        let result = session.execute("moveto 10 20");
        assert!(result.ok(), "unexpected: {}", result.message());
        assert_eq!(result.message(), "moved to (10, 20)");
        assert_eq!((session.x(), session.y()), (10, 20));

        assert!(session.execute("pen green").ok());
        assert!(session.execute("fill on").ok());
        assert_eq!(session.pen(), "green");
        assert!(session.fill());
    }

    #[test]
    fn rejected_line_reports_message() {
        let mut session = DrawingSession::new(100, 100);
        let result = session.execute("spiral 3");
        assert!(!result.ok());
        assert!(result.message().contains("unknown command"));
        assert_eq!((session.x(), session.y()), (0, 0));
    }

    #[test]
    fn check_does_not_draw() {
        let mut session = DrawingSession::new(100, 100);
        let before = session.svg();
        let result = session.check("circle 10");
        assert!(result.ok());
        assert_eq!(result.message(), "circle 10");
        assert!(!session.check("circle").ok());
        assert_eq!(session.svg(), before);
    }

    #[test]
    fn svg_follows_execution() {
        let mut session = DrawingSession::new(100, 100);
        assert!(!session.svg().contains("<ellipse"));
        session.execute("circle 5");
        let svg = session.svg();
        assert!(svg.contains("<svg"), "missing SVG root");
        assert!(svg.contains("<ellipse"), "missing circle: {svg}");
    }

    #[test]
    fn script_collects_diagnostics() {
        let mut session = DrawingSession::new(100, 100);
        let result = session.run_script("pen red\nbogus\nmoveto 3 4");
        assert!(!result.ok());
        let lines: Vec<_> = result.message().lines().map(str::to_owned).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "info line 1: pen color red");
        assert!(lines[1].starts_with("error line 2: unknown command"));
        assert_eq!((session.x(), session.y()), (3, 4));
    }
}
