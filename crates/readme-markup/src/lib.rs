//! readme-markup: Parser for the readme markup format
//!
//! This crate provides:
//! - Line lexer (indentation and `key: value` splitting)
//! - Line classifier producing a flat markup AST
//! - Readers for bracketed `BulletPoints` arrays
//!
//! # Example
//!
//! ```
//! use readme_markup::{parse, LineKind};
//!
//! let source = "Title:\tExample\nFeatures:\n\tBulletPoints: [fast, small]\n";
//!
//! let doc = parse(source);
//! assert_eq!(doc.lines.len(), 3);
//! assert_eq!(doc.lines[0].kind, LineKind::Title("Example".to_string()));
//! ```

pub mod array;
pub mod ast;
pub mod lexer;
pub mod parser;

// Re-export main types for convenient access
pub use array::{ArrayError, ArrayNode, BulletItem, legacy_items, parse_array, structural_items};
pub use ast::{Field, LineKind, MarkupDocument, MarkupLine, SectionTag};
pub use lexer::{Lexer, Span, Token, TokenKind};
pub use parser::{Parser, parse};
