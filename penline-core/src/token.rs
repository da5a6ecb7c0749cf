//! Tokenizer for command lines.
//!
//! A line is trimmed and then split on every single space. There is no
//! quoting and no collapsing of repeated spaces: `moveto  1 2` yields an
//! empty token between the two spaces, and that token counts as an
//! argument. An empty line yields a single empty verb token.

// ---------------------------------------------------------------------------
// Source location
// ---------------------------------------------------------------------------

/// A byte-offset span in the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// One space-delimited piece of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The raw text, possibly empty.
    pub text: &'a str,
    /// Location in the original, untrimmed line.
    pub span: Span,
}

/// Split a command line into tokens.
///
/// The result is never empty; the first token is the verb.
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let trimmed = line.trim();
    let mut offset = line.len() - line.trim_start().len();
    let mut tokens = Vec::new();

    for text in trimmed.split(' ') {
        tokens.push(Token {
            text,
            span: Span::new(offset, offset + text.len()),
        });
        offset += text.len() + 1;
    }

    tokens
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
