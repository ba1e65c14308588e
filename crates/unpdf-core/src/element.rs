use serde::Serialize;
use std::fmt;

/// The kind of content a block of extracted text was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElementKind {
    Title,
    NarrativeText,
    ListItem,
    Table,
    UncategorizedText,
}

/// A unit of structured content found on a page.
///
/// `Display` renders the element's text exactly as extracted, without
/// trimming, so interior and surrounding whitespace survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub text: String,
    pub page_number: usize,
}

impl Element {
    pub fn new(kind: ElementKind, text: impl Into<String>, page_number: usize) -> Self {
        Element {
            kind,
            text: text.into(),
            page_number,
        }
    }

    /// True when the text contains nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
