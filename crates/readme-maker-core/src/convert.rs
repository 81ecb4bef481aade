//! Markup AST to mdast conversion
//!
//! Walks the classified lines once, in order, and emits the Markdown lines
//! for each. The only state is whether a fenced code block is open.

use readme_markup::{
    ArrayError, BulletItem, Field, LineKind, MarkupDocument, MarkupLine, legacy_items,
    structural_items,
};
use readme_mdast::{Node, Root};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How `BulletPoints` arrays are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletMode {
    /// Comma-split heuristic; matches output of existing documents
    #[default]
    Legacy,
    /// Recursive descent over brackets; rejects unbalanced arrays
    Structural,
}

impl BulletMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Structural => "structural",
        }
    }
}

impl fmt::Display for BulletMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown bullet mode name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown bullet mode '{0}': expected 'legacy' or 'structural'")]
pub struct ParseBulletModeError(pub String);

impl FromStr for BulletMode {
    type Err = ParseBulletModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "structural" => Ok(Self::Structural),
            _ => Err(ParseBulletModeError(s.to_string())),
        }
    }
}

/// Options for markup to mdast conversion
#[derive(Debug, Clone, Default)]
pub struct TranspileOptions {
    /// How `BulletPoints` arrays are read
    pub bullets: BulletMode,
    /// Close a code block still open at end of input.
    /// Off by default: such blocks are left unterminated.
    pub close_unterminated_code_block: bool,
}

/// Fenced code block state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CodeBlockState {
    #[default]
    Outside,
    InCodeBlock {
        /// Language tag from `Syntax:`
        lang: String,
        /// Line of the `Syntax:` field that opened the block
        line: usize,
    },
}

impl CodeBlockState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::InCodeBlock { .. })
    }
}

/// Conversion errors
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid BulletPoints array at line {line}: {source}")]
    Bullets { line: usize, source: ArrayError },
}

/// Result of a conversion
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub root: Root,
    /// Code block state after the last line
    pub final_state: CodeBlockState,
}

impl Conversion {
    /// Line of the `Syntax:` field whose block was never closed, if any
    pub fn unterminated_code_block(&self) -> Option<usize> {
        match &self.final_state {
            CodeBlockState::InCodeBlock { line, .. } => Some(*line),
            CodeBlockState::Outside => None,
        }
    }
}

/// Convert a markup document to mdast
pub fn markup_to_mdast(
    doc: &MarkupDocument,
    options: &TranspileOptions,
) -> Result<Conversion, ConvertError> {
    let converter = Converter::new(options);
    converter.convert_document(doc)
}

/// Converter state
struct Converter<'a> {
    options: &'a TranspileOptions,
    state: CodeBlockState,
    root: Root,
}

impl<'a> Converter<'a> {
    fn new(options: &'a TranspileOptions) -> Self {
        Self {
            options,
            state: CodeBlockState::Outside,
            root: Root::default(),
        }
    }

    fn convert_document(mut self, doc: &MarkupDocument) -> Result<Conversion, ConvertError> {
        for line in &doc.lines {
            self.convert_line(line)?;
        }

        if let CodeBlockState::InCodeBlock { lang, line } = self.state.clone() {
            if self.options.close_unterminated_code_block {
                log::debug!("Closing code block opened at line {line} at end of input");
                self.close_code_block();
            } else {
                log::warn!(
                    "Code block ({}) opened at line {} is never closed",
                    if lang.is_empty() { "no language" } else { lang.as_str() },
                    line
                );
            }
        }

        Ok(Conversion {
            root: self.root,
            final_state: self.state,
        })
    }

    fn convert_line(&mut self, line: &MarkupLine) -> Result<(), ConvertError> {
        match &line.kind {
            LineKind::Blank => {}
            LineKind::Title(title) => {
                self.close_code_block();
                self.root.push(Node::heading(1, vec![Node::text(title)]));
            }
            LineKind::Section { key, value, .. } => {
                self.close_code_block();
                let text = if value.is_empty() { key } else { value };
                self.root.push(Node::heading(3, vec![Node::text(text)]));
            }
            LineKind::Field(field) => self.convert_field(field, line.line)?,
            LineKind::Text(text) => {
                self.root.push(Node::paragraph(vec![Node::text(text)]));
            }
        }
        Ok(())
    }

    fn convert_field(&mut self, field: &Field, line: usize) -> Result<(), ConvertError> {
        match field {
            Field::Url(url) => {
                self.root.push(Node::paragraph(vec![
                    Node::text("See a demo "),
                    Node::link(url, vec![Node::text("Here")]),
                ]));
            }
            Field::ImageUrl(url) => {
                self.root
                    .push(Node::paragraph(vec![Node::image(url, "Screenshot")]));
            }
            Field::BulletPoints(raw) => {
                log::debug!("BulletPoints at line {line}: {raw}");
                for item in self.read_bullets(raw, line)? {
                    self.root
                        .push(Node::list_item(item.depth, vec![Node::text(item.text)]));
                }
            }
            Field::Text | Field::Code => self.close_code_block(),
            Field::Syntax(lang) => {
                self.close_code_block();
                log::debug!("Opening code block ({lang}) at line {line}");
                self.root.push(Node::code_fence(lang));
                self.state = CodeBlockState::InCodeBlock {
                    lang: lang.clone(),
                    line,
                };
            }
            Field::Content => {}
        }
        Ok(())
    }

    fn read_bullets(&self, raw: &str, line: usize) -> Result<Vec<BulletItem>, ConvertError> {
        match self.options.bullets {
            BulletMode::Legacy => Ok(legacy_items(raw)),
            BulletMode::Structural => {
                structural_items(raw).map_err(|source| ConvertError::Bullets { line, source })
            }
        }
    }

    fn close_code_block(&mut self) {
        if let CodeBlockState::InCodeBlock { line, .. } = std::mem::take(&mut self.state) {
            log::debug!("Closing code block opened at line {line}");
            self.root.push(Node::code_fence_end());
        }
    }
}

#[cfg(test)]
mod tests;
