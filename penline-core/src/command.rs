//! The command grammar.
//!
//! Every verb is described once, in [`GRAMMAR`]: its name, and the name and
//! kind of each parameter. [`Command::parse`] interprets that table and is
//! the only way a line becomes a [`Command`], so executing a line and
//! checking it can never disagree about what is valid.

use std::fmt;

use crate::error::{ErrorKind, InterpResult, InterpreterError};
use crate::state::PenColor;
use crate::token::{tokenize, Token};

// ---------------------------------------------------------------------------
// Grammar table
// ---------------------------------------------------------------------------

/// The closed set of verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    MoveTo,
    DrawTo,
    Rectangle,
    Circle,
    Triangle,
    Pen,
    Fill,
    Clear,
    Reset,
}

impl Verb {
    /// The signature describing this verb.
    #[must_use]
    pub fn signature(self) -> &'static Signature {
        // GRAMMAR is ordered like the enum.
        &GRAMMAR[self as usize]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.signature().name
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an argument slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// A signed 32-bit decimal integer.
    Int,
    /// One of the selectable pen color names.
    Color,
    /// `on` or `off`.
    Toggle,
}

impl ArgKind {
    /// Parse a raw token into a typed argument.
    #[must_use]
    pub fn parse(self, text: &str) -> Option<Arg> {
        match self {
            Self::Int => text.parse().ok().map(Arg::Int),
            Self::Color => PenColor::from_name(text).map(Arg::Color),
            Self::Toggle => {
                if text.eq_ignore_ascii_case("on") {
                    Some(Arg::Toggle(true))
                } else if text.eq_ignore_ascii_case("off") {
                    Some(Arg::Toggle(false))
                } else {
                    None
                }
            }
        }
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::Int => "an integer",
            Self::Color => "one of red, green, blue",
            Self::Toggle => "`on` or `off`",
        }
    }
}

/// One parameter slot of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ArgKind,
}

impl Param {
    const fn int(name: &'static str) -> Self {
        Self {
            name,
            kind: ArgKind::Int,
        }
    }
}

/// A verb's name and parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub verb: Verb,
    pub name: &'static str,
    pub params: &'static [Param],
}

impl Signature {
    /// Number of arguments the verb requires.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }

    /// The correct form, e.g. `moveto <x> <y>`.
    #[must_use]
    pub fn usage(&self) -> String {
        let mut usage = self.name.to_owned();
        for param in self.params {
            usage.push_str(" <");
            usage.push_str(param.name);
            usage.push('>');
        }
        usage
    }
}

/// Every recognized verb, in [`Verb`] order.
pub static GRAMMAR: [Signature; 9] = [
    Signature {
        verb: Verb::MoveTo,
        name: "moveto",
        params: &[Param::int("x"), Param::int("y")],
    },
    Signature {
        verb: Verb::DrawTo,
        name: "drawto",
        params: &[Param::int("x"), Param::int("y")],
    },
    Signature {
        verb: Verb::Rectangle,
        name: "rectangle",
        params: &[Param::int("width"), Param::int("height")],
    },
    Signature {
        verb: Verb::Circle,
        name: "circle",
        params: &[Param::int("radius")],
    },
    Signature {
        verb: Verb::Triangle,
        name: "triangle",
        params: &[Param::int("base"), Param::int("side1"), Param::int("side2")],
    },
    Signature {
        verb: Verb::Pen,
        name: "pen",
        params: &[Param {
            name: "red|green|blue",
            kind: ArgKind::Color,
        }],
    },
    Signature {
        verb: Verb::Fill,
        name: "fill",
        params: &[Param {
            name: "on|off",
            kind: ArgKind::Toggle,
        }],
    },
    Signature {
        verb: Verb::Clear,
        name: "clear",
        params: &[],
    },
    Signature {
        verb: Verb::Reset,
        name: "reset",
        params: &[],
    },
];

/// Find the signature for a verb, ignoring case.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Signature> {
    GRAMMAR.iter().find(|sig| sig.name.eq_ignore_ascii_case(name))
}

// ---------------------------------------------------------------------------
// Parsed commands
// ---------------------------------------------------------------------------

/// A validated, typed argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    Int(i32),
    Color(PenColor),
    Toggle(bool),
}

/// A fully validated command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveTo { x: i32, y: i32 },
    DrawTo { x: i32, y: i32 },
    Rectangle { width: i32, height: i32 },
    Circle { radius: i32 },
    /// `side2` is validated but takes no part in vertex placement.
    Triangle { base: i32, side1: i32, side2: i32 },
    Pen(PenColor),
    Fill(bool),
    Clear,
    Reset,
}

impl Command {
    /// Tokenize and validate one command line.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::UnknownCommand`] if the verb is not in [`GRAMMAR`];
    /// [`ErrorKind::InvalidArguments`] if the argument count is wrong or any
    /// argument does not fit its slot.
    pub fn parse(line: &str) -> InterpResult<Self> {
        let tokens = tokenize(line);
        let Some((verb, rest)) = tokens.split_first() else {
            return Err(InterpreterError::new(
                ErrorKind::Internal,
                "tokenizer produced no tokens",
            ));
        };

        let sig = lookup(verb.text).ok_or_else(|| {
            InterpreterError::new(
                ErrorKind::UnknownCommand,
                format!("unknown command `{}`", verb.text),
            )
            .with_span(verb.span)
        })?;

        if rest.len() != sig.arity() {
            return Err(arity_error(sig, rest.len()).with_span(verb.span));
        }

        let args = rest
            .iter()
            .zip(sig.params)
            .map(|(token, param)| parse_arg(sig, token, param))
            .collect::<InterpResult<Vec<_>>>()?;

        Self::from_args(sig, &args)
    }

    /// Build the typed command from arguments already checked against `sig`.
    fn from_args(sig: &Signature, args: &[Arg]) -> InterpResult<Self> {
        let command = match (sig.verb, args) {
            (Verb::MoveTo, &[Arg::Int(x), Arg::Int(y)]) => Self::MoveTo { x, y },
            (Verb::DrawTo, &[Arg::Int(x), Arg::Int(y)]) => Self::DrawTo { x, y },
            (Verb::Rectangle, &[Arg::Int(width), Arg::Int(height)]) => {
                Self::Rectangle { width, height }
            }
            (Verb::Circle, &[Arg::Int(radius)]) => Self::Circle { radius },
            (Verb::Triangle, &[Arg::Int(base), Arg::Int(side1), Arg::Int(side2)]) => {
                Self::Triangle { base, side1, side2 }
            }
            (Verb::Pen, &[Arg::Color(color)]) => Self::Pen(color),
            (Verb::Fill, &[Arg::Toggle(on)]) => Self::Fill(on),
            (Verb::Clear, &[]) => Self::Clear,
            (Verb::Reset, &[]) => Self::Reset,
            _ => {
                return Err(InterpreterError::new(
                    ErrorKind::Internal,
                    format!("grammar entry for `{}` does not match its command", sig.name),
                ))
            }
        };
        Ok(command)
    }

    #[must_use]
    pub const fn verb(&self) -> Verb {
        match self {
            Self::MoveTo { .. } => Verb::MoveTo,
            Self::DrawTo { .. } => Verb::DrawTo,
            Self::Rectangle { .. } => Verb::Rectangle,
            Self::Circle { .. } => Verb::Circle,
            Self::Triangle { .. } => Verb::Triangle,
            Self::Pen(_) => Verb::Pen,
            Self::Fill(_) => Verb::Fill,
            Self::Clear => Verb::Clear,
            Self::Reset => Verb::Reset,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = self.verb();
        match *self {
            Self::MoveTo { x, y } | Self::DrawTo { x, y } => write!(f, "{verb} {x} {y}"),
            Self::Rectangle { width, height } => write!(f, "{verb} {width} {height}"),
            Self::Circle { radius } => write!(f, "{verb} {radius}"),
            Self::Triangle { base, side1, side2 } => {
                write!(f, "{verb} {base} {side1} {side2}")
            }
            Self::Pen(color) => write!(f, "{verb} {color}"),
            Self::Fill(on) => write!(f, "{verb} {}", if on { "on" } else { "off" }),
            Self::Clear | Self::Reset => write!(f, "{verb}"),
        }
    }
}

fn parse_arg(sig: &Signature, token: &Token<'_>, param: &Param) -> InterpResult<Arg> {
    param.kind.parse(token.text).ok_or_else(|| {
        InterpreterError::new(
            ErrorKind::InvalidArguments,
            format!(
                "invalid arguments for `{}`: `{}` is not {}; usage: {}",
                sig.name,
                token.text,
                param.kind.describe(),
                sig.usage()
            ),
        )
        .with_span(token.span)
    })
}

fn arity_error(sig: &Signature, got: usize) -> InterpreterError {
    let expected = sig.arity();
    let plural = if expected == 1 { "" } else { "s" };
    InterpreterError::new(
        ErrorKind::InvalidArguments,
        format!(
            "invalid arguments for `{}`: expected {expected} parameter{plural}, got {got}; usage: {}",
            sig.name,
            sig.usage()
        ),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
