//! Readme markup AST types
//!
//! The markup is line oriented, so the document is a flat sequence of
//! classified lines. Nesting is only expressed through indentation, which
//! the parser has already resolved into [`LineKind`].

use serde::{Deserialize, Serialize};

/// A complete markup document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupDocument {
    /// Classified lines, in source order
    pub lines: Vec<MarkupLine>,
}

/// A classified source line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupLine {
    /// Line number (1-indexed)
    pub line: usize,
    pub kind: LineKind,
}

/// What a source line means
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    /// Empty or whitespace-only line
    Blank,

    /// The document title (first unindented `Title...:` line)
    Title(String),

    /// Unindented `key: value` line opening a section
    Section {
        tag: SectionTag,
        key: String,
        value: String,
    },

    /// Indented reserved field
    Field(Field),

    /// Free text or an unrecognized line, trimmed
    Text(String),
}

/// Known section keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionTag {
    Title,
    Description,
    Screenshot,
    Demo,
    Usage,
    Features,
    Notes,
    Todo,

    // Any other key (sections are not validated)
    Unknown(String),
}

impl SectionTag {
    /// Parse a section tag from its key. Keys are case sensitive.
    pub fn parse(s: &str) -> Self {
        match s {
            "Title" => Self::Title,
            "Description" => Self::Description,
            "Screenshot" => Self::Screenshot,
            "Demo" => Self::Demo,
            "Usage" => Self::Usage,
            "Features" => Self::Features,
            "Notes" => Self::Notes,
            "TODO" => Self::Todo,
            _ => Self::Unknown(s.to_string()),
        }
    }

    /// Get the key as written in markup
    pub fn as_str(&self) -> &str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Screenshot => "Screenshot",
            Self::Demo => "Demo",
            Self::Usage => "Usage",
            Self::Features => "Features",
            Self::Notes => "Notes",
            Self::Todo => "TODO",
            Self::Unknown(name) => name,
        }
    }
}

/// Reserved fields that may appear inside a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// `URL: <url>`
    Url(String),
    /// `ImageURL: <url>`
    ImageUrl(String),
    /// `BulletPoints: [a, b, [c]]` (raw, unparsed value)
    BulletPoints(String),
    /// `Text: |`
    Text,
    /// `Code:`
    Code,
    /// `Syntax: <language>`
    Syntax(String),
    /// `Content: |`
    Content,
}

impl Field {
    /// Match a field by its key. Returns `None` for keys that are not reserved.
    pub fn parse(key: &str, value: &str) -> Option<Self> {
        let field = match key {
            "URL" => Self::Url(value.to_string()),
            "ImageURL" => Self::ImageUrl(value.to_string()),
            "BulletPoints" => Self::BulletPoints(value.to_string()),
            "Text" => Self::Text,
            "Code" => Self::Code,
            "Syntax" => Self::Syntax(value.to_string()),
            "Content" => Self::Content,
            _ => return None,
        };
        Some(field)
    }

    /// Get the key as written in markup
    pub fn key(&self) -> &'static str {
        match self {
            Self::Url(_) => "URL",
            Self::ImageUrl(_) => "ImageURL",
            Self::BulletPoints(_) => "BulletPoints",
            Self::Text => "Text",
            Self::Code => "Code",
            Self::Syntax(_) => "Syntax",
            Self::Content => "Content",
        }
    }
}

impl MarkupDocument {
    /// The document title, if one was declared
    pub fn title(&self) -> Option<&str> {
        self.lines.iter().find_map(|l| match &l.kind {
            LineKind::Title(t) => Some(t.as_str()),
            _ => None,
        })
    }

    /// Iterate over section lines
    pub fn sections(&self) -> impl Iterator<Item = &MarkupLine> {
        self.lines
            .iter()
            .filter(|l| matches!(l.kind, LineKind::Section { .. }))
    }
}

#[cfg(feature = "json")]
impl MarkupDocument {
    /// Serialize the document to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize the document to a pretty-printed JSON string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_tag_roundtrip() {
        for key in [
            "Title",
            "Description",
            "Screenshot",
            "Demo",
            "Usage",
            "Features",
            "Notes",
            "TODO",
        ] {
            let tag = SectionTag::parse(key);
            assert!(!matches!(tag, SectionTag::Unknown(_)), "{key}");
            assert_eq!(tag.as_str(), key);
        }
    }

    #[test]
    fn test_section_tag_is_case_sensitive() {
        assert_eq!(
            SectionTag::parse("todo"),
            SectionTag::Unknown("todo".to_string())
        );
        assert_eq!(SectionTag::parse("Install").as_str(), "Install");
    }

    #[test]
    fn test_field_parse() {
        assert_eq!(
            Field::parse("URL", "http://x"),
            Some(Field::Url("http://x".to_string()))
        );
        assert_eq!(
            Field::parse("ImageURL", "http://y"),
            Some(Field::ImageUrl("http://y".to_string()))
        );
        assert_eq!(Field::parse("Text", "|"), Some(Field::Text));
        assert_eq!(Field::parse("Content", "|"), Some(Field::Content));
        assert_eq!(Field::parse("Url", "x"), None);
        assert_eq!(Field::parse("Language", "go"), None);
    }

    #[test]
    fn test_field_key() {
        let field = Field::parse("Syntax", "rust").unwrap();
        assert_eq!(field.key(), "Syntax");
        assert_eq!(Field::Code.key(), "Code");
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_document_to_json() {
        let doc = MarkupDocument {
            lines: vec![MarkupLine {
                line: 1,
                kind: LineKind::Title("Hello".to_string()),
            }],
        };

        let json = doc.to_json().unwrap();
        assert!(json.contains("\"title\":\"Hello\""));
        assert!(json.contains("\"line\":1"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_roundtrip() {
        let doc = MarkupDocument {
            lines: vec![
                MarkupLine {
                    line: 1,
                    kind: LineKind::Section {
                        tag: SectionTag::Todo,
                        key: "TODO".to_string(),
                        value: String::new(),
                    },
                },
                MarkupLine {
                    line: 2,
                    kind: LineKind::Field(Field::Syntax("go".to_string())),
                },
            ],
        };

        let json = doc.to_json_pretty().unwrap();
        assert!(json.contains('\n'));
        let parsed = MarkupDocument::from_json(&json).unwrap();
        assert_eq!(parsed, doc);
    }
}
