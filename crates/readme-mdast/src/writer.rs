//! mdast to Markdown writer
//!
//! Writes each block node of the root on its own line, in order, with no
//! blank lines added between them.

use crate::mdast::{Node, Root};

/// Options for the Markdown writer
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Marker written before list item text
    pub bullet_marker: char,
    /// Spaces of indentation per list nesting level
    pub indent_width: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            bullet_marker: '*',
            indent_width: 2,
        }
    }
}

/// Convert mdast to Markdown
pub fn mdast_to_markdown(root: &Root, options: &WriterOptions) -> String {
    let mut writer = Writer::new(options);
    writer.write_root(root)
}

/// Markdown writer state
struct Writer<'a> {
    options: &'a WriterOptions,
    output: String,
}

impl<'a> Writer<'a> {
    fn new(options: &'a WriterOptions) -> Self {
        Self {
            options,
            output: String::new(),
        }
    }

    fn write_root(&mut self, root: &Root) -> String {
        for node in &root.children {
            self.write_block(node);
            self.output.push('\n');
        }
        std::mem::take(&mut self.output)
    }

    fn write_block(&mut self, node: &Node) {
        match node {
            Node::Heading(h) => self.write_heading(h),
            Node::Paragraph(p) => self.write_inlines(&p.children),
            Node::ListItem(li) => self.write_list_item(li),
            Node::CodeFence(f) => self.write_code_fence(f),
            Node::CodeFenceEnd => self.output.push_str("```"),
            // Inline nodes at block level stand alone on their line
            inline => self.write_inline(inline),
        }
    }

    fn write_heading(&mut self, h: &crate::mdast::Heading) {
        for _ in 0..h.depth {
            self.output.push('#');
        }
        self.output.push(' ');
        self.write_inlines(&h.children);
    }

    fn write_list_item(&mut self, li: &crate::mdast::ListItem) {
        for _ in 0..li.depth * self.options.indent_width {
            self.output.push(' ');
        }
        self.output.push(self.options.bullet_marker);
        self.output.push(' ');
        self.write_inlines(&li.children);
    }

    fn write_code_fence(&mut self, f: &crate::mdast::CodeFence) {
        self.output.push_str("```");
        if let Some(lang) = &f.lang {
            self.output.push_str(lang);
        }
    }

    fn write_inlines(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.write_inline(node);
        }
    }

    fn write_inline(&mut self, node: &Node) {
        match node {
            Node::Text(t) => self.output.push_str(&t.value),
            Node::Link(l) => self.write_link(l),
            Node::Image(img) => self.write_image(img),
            // Block nodes nested in inline content are not produced by the converter
            Node::Heading(_)
            | Node::Paragraph(_)
            | Node::ListItem(_)
            | Node::CodeFence(_)
            | Node::CodeFenceEnd => {}
        }
    }

    fn write_link(&mut self, l: &crate::mdast::Link) {
        self.output.push('[');
        self.write_inlines(&l.children);
        self.output.push_str("](");
        self.output.push_str(&l.url);
        if let Some(title) = &l.title {
            self.output.push_str(" \"");
            self.output.push_str(title);
            self.output.push('"');
        }
        self.output.push(')');
    }

    fn write_image(&mut self, img: &crate::mdast::Image) {
        self.output.push_str("![");
        self.output.push_str(&img.alt);
        self.output.push_str("](");
        self.output.push_str(&img.url);
        if let Some(title) = &img.title {
            self.output.push_str(" \"");
            self.output.push_str(title);
            self.output.push('"');
        }
        self.output.push(')');
    }
}
