//! readme-maker-core: Core library for converting readme markup to Markdown
//!
//! This crate provides:
//! - Markup AST to mdast conversion (code block state machine)
//! - The blank markup template
//! - One-call `transpile` entry points
//!
//! Parsing lives in `readme-markup` and Markdown output in `readme-mdast`;
//! both are re-exported here.

pub mod convert;
pub mod template;

pub use convert::{
    BulletMode, CodeBlockState, Conversion, ConvertError, ParseBulletModeError, TranspileOptions,
    markup_to_mdast,
};
pub use readme_markup::{LineKind, MarkupDocument, MarkupLine, SectionTag, parse};
pub use readme_mdast::{Node as MdNode, Root as MdRoot, WriterOptions, mdast_to_markdown};
pub use template::{Placeholder, TemplateSection, blank_template, template_sections};

/// Markdown produced from a markup source
#[derive(Debug, Clone, PartialEq)]
pub struct Transpiled {
    pub markdown: String,
    /// Code block state after the last input line
    pub final_state: CodeBlockState,
}

/// Convert markup source to Markdown with the default writer options
pub fn transpile(source: &str, options: &TranspileOptions) -> Result<String, ConvertError> {
    transpile_with(source, options, &WriterOptions::default()).map(|t| t.markdown)
}

/// Convert markup source to Markdown, keeping the final code block state
pub fn transpile_with(
    source: &str,
    options: &TranspileOptions,
    writer_options: &WriterOptions,
) -> Result<Transpiled, ConvertError> {
    let doc = parse(source);
    let conversion = markup_to_mdast(&doc, options)?;
    Ok(Transpiled {
        markdown: mdast_to_markdown(&conversion.root, writer_options),
        final_state: conversion.final_state,
    })
}
