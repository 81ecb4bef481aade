//! Readme markup parser
//!
//! Classifies each lexed line. The only state carried between lines is
//! whether the document title has been seen.
//!
//! Parsing never fails: lines that do not match a known shape become
//! [`LineKind::Text`] and are passed through by the converter.

use crate::ast::{Field, LineKind, MarkupDocument, MarkupLine, SectionTag};
use crate::lexer::{Lexer, Token, TokenKind};

/// Markup parser
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    title_seen: bool,
}

impl Parser {
    /// Create a new parser from source text
    pub fn new(source: &str) -> Self {
        Self {
            tokens: Lexer::tokenize(source),
            pos: 0,
            title_seen: false,
        }
    }

    /// Parse the entire document
    pub fn parse(&mut self) -> MarkupDocument {
        let mut lines = Vec::with_capacity(self.tokens.len());

        while let Some(token) = self.advance() {
            let line = token.span.line;
            let kind = self.classify(&token);
            lines.push(MarkupLine { line, kind });
        }

        MarkupDocument { lines }
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    fn classify(&mut self, token: &Token) -> LineKind {
        match &token.kind {
            TokenKind::Blank => LineKind::Blank,
            TokenKind::Entry { key, value } if !token.indented => {
                // Only the first `Title` line is the title; later ones are
                // ordinary sections.
                if !self.title_seen && key.starts_with("Title") {
                    self.title_seen = true;
                    return LineKind::Title(value.clone());
                }
                LineKind::Section {
                    tag: SectionTag::parse(key),
                    key: key.clone(),
                    value: value.clone(),
                }
            }
            TokenKind::Entry { key, value } => match Field::parse(key, value) {
                Some(field) => LineKind::Field(field),
                None => LineKind::Text(token.text.clone()),
            },
            TokenKind::Text => LineKind::Text(token.text.clone()),
        }
    }
}

/// Parse markup source into a document
pub fn parse(source: &str) -> MarkupDocument {
    Parser::new(source).parse()
}
