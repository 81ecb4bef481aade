//! Bracketed array values (`BulletPoints: [a, b, [c, d]]`)
//!
//! Two readers are provided:
//!
//! - [`legacy_items`] splits on every comma and infers nesting depth from the
//!   brackets at the edges of each chunk, one level per chunk edge. It never
//!   fails and reproduces the output existing documents were written against.
//! - [`structural_items`] is a recursive descent parser that respects commas
//!   inside nested brackets and reports unbalanced input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One bullet to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletItem {
    /// Nesting depth (0 = top level)
    pub depth: usize,
    pub text: String,
}

impl BulletItem {
    pub fn new(depth: usize, text: impl Into<String>) -> Self {
        Self {
            depth,
            text: text.into(),
        }
    }
}

/// Errors from the structural array parser.
///
/// Columns are 1-indexed character positions within the array value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("Unclosed '[' opened at column {column}")]
    UnclosedBracket { column: usize },

    #[error("Unexpected ']' at column {column}")]
    UnexpectedCloseBracket { column: usize },

    #[error("Unexpected '{found}' at column {column}: expected ',' or ']'")]
    UnexpectedChar { found: char, column: usize },

    #[error("Unexpected content after the closing ']' at column {column}")]
    TrailingContent { column: usize },
}

/// A parsed array element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArrayNode {
    Item(String),
    List(Vec<ArrayNode>),
}

/// Read bullets with the comma-split heuristic.
///
/// All leading `[` and trailing `]` of the whole value are dropped, then the
/// rest is split on every comma. A chunk starting with `[` goes one level
/// deeper before it is emitted and a chunk ending with `]` comes back one
/// level afterwards, however many brackets it carries. The depth may go
/// below zero on unbalanced input; such chunks render at the top level.
///
/// Every chunk is emitted, so `[]` yields a single empty bullet.
pub fn legacy_items(raw: &str) -> Vec<BulletItem> {
    let inner = raw.trim().trim_end_matches(']').trim_start_matches('[');

    let mut items = Vec::new();
    let mut depth = 0isize;

    for chunk in inner.split(',') {
        let chunk = chunk.trim();

        if chunk.starts_with('[') {
            depth += 1;
        }

        let text = chunk.trim_start_matches('[').trim_end_matches(']').trim();
        items.push(BulletItem::new(depth.max(0).unsigned_abs(), text));

        if chunk.ends_with(']') {
            depth -= 1;
        }
    }

    items
}

/// Read bullets with the structural parser
pub fn structural_items(raw: &str) -> Result<Vec<BulletItem>, ArrayError> {
    let nodes = parse_array(raw)?;
    let mut items = Vec::new();
    flatten(&nodes, 0, &mut items);
    Ok(items)
}

/// Parse an array value into a tree.
///
/// A value starting with `[` must be exactly one list; anything else is read
/// as a bare comma-separated list.
pub fn parse_array(raw: &str) -> Result<Vec<ArrayNode>, ArrayError> {
    ArrayParser::new(raw).parse()
}

fn flatten(nodes: &[ArrayNode], depth: usize, out: &mut Vec<BulletItem>) {
    for node in nodes {
        match node {
            ArrayNode::Item(text) => out.push(BulletItem::new(depth, text.clone())),
            ArrayNode::List(children) => flatten(children, depth + 1, out),
        }
    }
}

struct ArrayParser {
    chars: Vec<char>,
    pos: usize,
}

impl ArrayParser {
    fn new(raw: &str) -> Self {
        Self {
            chars: raw.trim().chars().collect(),
            pos: 0,
        }
    }

    fn parse(&mut self) -> Result<Vec<ArrayNode>, ArrayError> {
        self.skip_whitespace();

        if self.peek() != Some('[') {
            return self.parse_elements(None);
        }

        let nodes = self.parse_list()?;
        self.skip_whitespace();
        if !self.is_at_end() {
            return Err(ArrayError::TrailingContent {
                column: self.column(),
            });
        }
        Ok(nodes)
    }

    /// Parse `[ elements ]`, starting at the `[`
    fn parse_list(&mut self) -> Result<Vec<ArrayNode>, ArrayError> {
        let open = self.column();
        self.pos += 1;
        self.parse_elements(Some(open))
    }

    /// Parse elements up to the `]` matching `open` (consumed), or up to the
    /// end of input when there is no enclosing bracket.
    fn parse_elements(&mut self, open: Option<usize>) -> Result<Vec<ArrayNode>, ArrayError> {
        let mut nodes = Vec::new();

        loop {
            self.skip_whitespace();

            match self.peek() {
                None => {
                    return match open {
                        Some(column) => Err(ArrayError::UnclosedBracket { column }),
                        None => Ok(nodes),
                    };
                }
                Some(']') => {
                    if open.is_none() {
                        return Err(ArrayError::UnexpectedCloseBracket {
                            column: self.column(),
                        });
                    }
                    self.pos += 1;
                    return Ok(nodes);
                }
                Some(',') => {
                    // Empty element
                    self.pos += 1;
                    continue;
                }
                Some('[') => nodes.push(ArrayNode::List(self.parse_list()?)),
                Some(_) => nodes.push(ArrayNode::Item(self.parse_text())),
            }

            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.pos += 1,
                None | Some(']') => {}
                Some(found) => {
                    return Err(ArrayError::UnexpectedChar {
                        found,
                        column: self.column(),
                    });
                }
            }
        }
    }

    fn parse_text(&mut self) -> String {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if matches!(ch, ',' | '[' | ']') {
                break;
            }
            self.pos += 1;
        }
        self.chars[start..self.pos]
            .iter()
            .collect::<String>()
            .trim()
            .to_string()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn column(&self) -> usize {
        self.pos + 1
    }
}
