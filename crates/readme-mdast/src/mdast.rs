//! mdast (Markdown Abstract Syntax Tree) types
//!
//! A line-level subset of mdast. Every block node in [`Root::children`]
//! renders to exactly one output line, so code fences are split into an
//! opening and a closing node instead of one `code` node holding its body.
//! Reference: https://github.com/syntax-tree/mdast

use serde::{Deserialize, Serialize};

/// Root node of an mdast document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Root {
    pub children: Vec<Node>,
}

/// An mdast node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    // Block nodes (one line each)
    Heading(Heading),
    Paragraph(Paragraph),
    ListItem(ListItem),
    CodeFence(CodeFence),
    CodeFenceEnd,

    // Inline nodes
    Text(Text),
    Link(Link),
    Image(Image),
}

/// Heading node (# to ######)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub depth: u8,
    pub children: Vec<Node>,
}

/// A single line of inline content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub children: Vec<Node>,
}

/// A bullet on its own line, indented by nesting depth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Nesting depth (0 = top level)
    pub depth: usize,
    pub children: Vec<Node>,
}

/// Opening fence of a code block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeFence {
    pub lang: Option<String>,
}

/// Text node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

/// Link node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
    pub children: Vec<Node>,
}

/// Image node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub title: Option<String>,
    pub alt: String,
}

// Convenience constructors
impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(Text { value: s.into() })
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Paragraph { children })
    }

    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading(Heading { depth, children })
    }

    pub fn list_item(depth: usize, children: Vec<Node>) -> Self {
        Node::ListItem(ListItem { depth, children })
    }

    /// Opening fence; an empty language is treated as none
    pub fn code_fence(lang: impl Into<String>) -> Self {
        let lang = lang.into();
        Node::CodeFence(CodeFence {
            lang: (!lang.is_empty()).then_some(lang),
        })
    }

    pub fn code_fence_end() -> Self {
        Node::CodeFenceEnd
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link(Link {
            url: url.into(),
            title: None,
            children,
        })
    }

    pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Node::Image(Image {
            url: url.into(),
            title: None,
            alt: alt.into(),
        })
    }

    /// Whether this node opens or closes a code fence
    pub fn is_fence(&self) -> bool {
        matches!(self, Node::CodeFence(_) | Node::CodeFenceEnd)
    }
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }
}
