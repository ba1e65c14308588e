pub mod pdf_extract;
pub mod pdftotext;

use crate::error::UnpdfError;
use std::fmt;
use std::path::Path;

/// How much fidelity to ask of the extraction engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Plain reading-order text. Cheapest mode every backend supports.
    #[default]
    Fast,
    /// Column-preserving text; enables table detection.
    Layout,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Fast => write!(f, "fast"),
            Strategy::Layout => write!(f, "layout"),
        }
    }
}

/// Raw text of a single page as produced by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfBackend: Send + Sync {
    /// Extract the text of the PDF at `path`, one PageText per page.
    fn extract_pages(&self, path: &Path, strategy: Strategy) -> Result<Vec<PageText>, UnpdfError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Split engine output into pages on form feed, dropping trailing empty pages.
pub(crate) fn split_pages(text: &str) -> Vec<PageText> {
    let mut pages: Vec<PageText> = text
        .split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageText {
            page_number: i + 1,
            text: page_text.to_string(),
        })
        .collect();

    while pages.len() > 1 && pages.last().is_some_and(|p| p.text.trim().is_empty()) {
        pages.pop();
    }

    pages
}

pub(crate) fn ensure_exists(path: &Path) -> Result<(), UnpdfError> {
    if path.exists() {
        Ok(())
    } else {
        Err(UnpdfError::FileNotFound(path.to_path_buf()))
    }
}
