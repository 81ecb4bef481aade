//! readme-mdast: line-level mdast types and Markdown writer for readme-maker
//!
//! This crate provides:
//! - mdast (Markdown Abstract Syntax Tree) types (line-level subset)
//! - Serialization to Markdown, one line per block node
//!
//! ## Example
//!
//! ```rust
//! use readme_mdast::{Node, Root, mdast_to_markdown, WriterOptions};
//!
//! let doc = Root::new(vec![
//!     Node::heading(1, vec![Node::text("Hello")]),
//!     Node::list_item(1, vec![Node::text("World")]),
//! ]);
//!
//! let md = mdast_to_markdown(&doc, &WriterOptions::default());
//! assert_eq!(md, "# Hello\n  * World\n");
//! ```

pub mod mdast;
pub mod writer;

pub use mdast::{CodeFence, Heading, Image, Link, ListItem, Node, Paragraph, Root, Text};
pub use writer::{WriterOptions, mdast_to_markdown};
