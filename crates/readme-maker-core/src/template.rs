//! Blank markup template
//!
//! The template lists every section the converter knows about, each with
//! empty placeholders for the fields that section usually carries.

use readme_markup::SectionTag;

/// An empty field written under a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `URL:` with no value
    Url,
    /// `BulletPoints: []`
    BulletPoints,
    /// `Code:` with empty `Syntax:` and `Content: |` children
    Code,
    /// `Text: |` followed by a blank line for free text
    Text,
}

impl Placeholder {
    fn lines(self) -> &'static [&'static str] {
        match self {
            Self::Url => &["\tURL:"],
            Self::BulletPoints => &["\tBulletPoints: []"],
            Self::Code => &["\tCode:", "\t\tSyntax:", "\t\tContent: |", ""],
            Self::Text => &["\tText: |", ""],
        }
    }
}

/// A section of the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSection {
    pub tag: SectionTag,
    pub placeholders: &'static [Placeholder],
}

/// Sections of the blank template, in output order (after the title)
pub fn template_sections() -> Vec<TemplateSection> {
    use Placeholder::*;

    let section = |tag: SectionTag, placeholders: &'static [Placeholder]| TemplateSection {
        tag,
        placeholders,
    };
    vec![
        section(SectionTag::Description, &[Text]),
        section(SectionTag::Screenshot, &[Url]),
        section(SectionTag::Demo, &[Url, Text]),
        section(SectionTag::Usage, &[BulletPoints, Code, Text]),
        section(SectionTag::Features, &[BulletPoints, Text]),
        section(SectionTag::Notes, &[Text]),
        section(SectionTag::Todo, &[BulletPoints, Text]),
    ]
}

/// Render the blank template
pub fn blank_template() -> String {
    let mut lines = vec![format!("{}:\t", SectionTag::Title.as_str())];

    for section in template_sections() {
        lines.push(format!("{}:", section.tag.as_str()));
        for placeholder in section.placeholders {
            lines.extend(placeholder.lines().iter().map(|l| l.to_string()));
        }
    }

    let mut output = String::new();
    for line in lines {
        output.push_str(&line);
        output.push('\n');
    }
    output
}
