//! Readme markup lexer
//!
//! Splits a markup source into one token per line. A token records whether
//! the line is indented, its trimmed text, and the `key: value` split on the
//! first colon when the line has one.

/// A token in a markup file (one per source line)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The line with surrounding whitespace removed
    pub text: String,
    /// Whether the line starts with a tab or a space
    pub indented: bool,
    pub span: Span,
}

/// The kind of token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Empty or whitespace-only line
    Blank,
    /// Line containing a colon, split on the first one.
    /// Both sides are trimmed.
    Entry { key: String, value: String },
    /// Any other line
    Text,
}

/// Source location span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Starting byte offset of the line
    pub start: usize,
    /// Ending byte offset (exclusive, line terminator not included)
    pub end: usize,
    /// Line number (1-indexed)
    pub line: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize) -> Self {
        Self { start, end, line }
    }
}

/// Lexer for readme markup
pub struct Lexer<'a> {
    input: &'a str,
    /// Current byte position
    pos: usize,
    /// Current line (1-indexed)
    line: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token() {
            tokens.push(token);
        }
        tokens
    }

    /// Get the next token, or `None` once the input is exhausted.
    ///
    /// A trailing newline does not produce an extra blank token.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.pos >= self.input.len() {
            return None;
        }

        let rest = &self.input[self.pos..];
        let (raw, consumed) = match rest.find('\n') {
            Some(idx) => (&rest[..idx], idx + 1),
            None => (rest, rest.len()),
        };
        let raw = raw.strip_suffix('\r').unwrap_or(raw);

        let span = Span::new(self.pos, self.pos + raw.len(), self.line);
        self.pos += consumed;
        self.line += 1;

        Some(classify(raw, span))
    }
}

fn classify(raw: &str, span: Span) -> Token {
    let text = raw.trim();
    let indented = raw.starts_with([' ', '\t']);

    let kind = if text.is_empty() {
        TokenKind::Blank
    } else if let Some((key, value)) = text.split_once(':') {
        TokenKind::Entry {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
        }
    } else {
        TokenKind::Text
    };

    Token {
        kind,
        text: text.to_string(),
        indented,
        span,
    }
}
