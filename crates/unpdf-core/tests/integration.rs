//! Integration tests for the extract() pipeline.
//!
//! Uses a MockBackend that returns pre-built PageText without invoking
//! pdftotext, so these tests run without poppler-utils.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use unpdf_core::backend::pdftotext::PdftotextBackend;
use unpdf_core::{
    extract, extract_text, partition_pdf, ElementKind, PageText, PdfBackend, Strategy, UnpdfError,
};

struct MockBackend {
    pages: Vec<PageText>,
    calls: AtomicUsize,
}

impl MockBackend {
    fn new(pages: &[&str]) -> Self {
        MockBackend {
            pages: pages
                .iter()
                .enumerate()
                .map(|(i, text)| PageText {
                    page_number: i + 1,
                    text: text.to_string(),
                })
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl PdfBackend for MockBackend {
    fn extract_pages(&self, _path: &Path, _strategy: Strategy) -> Result<Vec<PageText>, UnpdfError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingBackend;

impl PdfBackend for FailingBackend {
    fn extract_pages(&self, _path: &Path, _strategy: Strategy) -> Result<Vec<PageText>, UnpdfError> {
        Err(UnpdfError::PdftotextFailed {
            code: 1,
            stderr: "Syntax Error: May not be a PDF file".into(),
        })
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

// ---------------------------------------------------------------------------
// Test 1: Non-empty elements joined with a blank line, in extraction order
// ---------------------------------------------------------------------------
#[test]
fn elements_joined_in_order() {
    let backend = MockBackend::new(&[
        "Annual Report\n\nRevenue grew in every region.\nCosts fell.\n",
        "• North\n• South\n",
    ]);

    let text = extract(Path::new("report.pdf"), &backend, Strategy::Fast).unwrap();

    assert_eq!(
        text,
        "Annual Report\n\nRevenue grew in every region.\nCosts fell.\n\n• North\n\n• South"
    );
}

// ---------------------------------------------------------------------------
// Test 2: A document with only whitespace yields the empty string
// ---------------------------------------------------------------------------
#[test]
fn whitespace_only_document_is_empty() {
    let backend = MockBackend::new(&["   \n\t\n", "\n\n"]);
    let text = extract_text(Path::new("blank.pdf"), &backend, Strategy::Fast);
    assert_eq!(text, "");
}

// ---------------------------------------------------------------------------
// Test 3: Interior whitespace of kept elements is preserved verbatim
// ---------------------------------------------------------------------------
#[test]
fn interior_whitespace_preserved() {
    let backend = MockBackend::new(&["  Column   spaced    text.  \n   \n"]);
    let text = extract_text(Path::new("spaced.pdf"), &backend, Strategy::Fast);
    assert_eq!(text, "  Column   spaced    text.  ");
}

// ---------------------------------------------------------------------------
// Test 4: Backend failure is folded into {"error": ...}
// ---------------------------------------------------------------------------
#[test]
fn failure_becomes_error_json() {
    let text = extract_text(Path::new("broken.pdf"), &FailingBackend, Strategy::Fast);
    assert_eq!(
        text,
        r#"{"error": "pdftotext failed with exit code 1: Syntax Error: May not be a PDF file"}"#
    );

    let err = extract(Path::new("broken.pdf"), &FailingBackend, Strategy::Fast).unwrap_err();
    assert!(matches!(err, UnpdfError::PdftotextFailed { code: 1, .. }));
}

// ---------------------------------------------------------------------------
// Test 5: Missing file through the real backend is an error JSON
// ---------------------------------------------------------------------------
#[test]
fn missing_file_reports_error_json() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.pdf");

    let text = extract_text(&missing, &PdftotextBackend::new(), Strategy::Fast);
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let message = parsed["error"].as_str().unwrap();
    assert!(message.starts_with("file not found: "));
    assert!(message.ends_with("nope.pdf"));
}

// ---------------------------------------------------------------------------
// Test 6: Extraction is idempotent
// ---------------------------------------------------------------------------
#[test]
fn extraction_is_idempotent() {
    let backend = MockBackend::new(&["Heading\n\nSome body text here.\n"]);
    let path = Path::new("same.pdf");

    let first = extract_text(path, &backend, Strategy::Fast);
    let second = extract_text(path, &backend, Strategy::Fast);

    assert_eq!(first, second);
    assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
}

// ---------------------------------------------------------------------------
// Test 7: Layout strategy surfaces tables as single elements
// ---------------------------------------------------------------------------
#[test]
fn layout_strategy_detects_tables() {
    let backend = MockBackend::new(&[concat!(
        "Price List\n",
        "\n",
        "  Item        Qty      Price\n",
        "  Apples      3        1.20\n",
        "  Pears       10       0.80\n",
    )]);

    let layout = partition_pdf(Path::new("prices.pdf"), &backend, Strategy::Layout).unwrap();
    assert_eq!(layout.len(), 2);
    assert_eq!(layout[0].kind, ElementKind::Title);
    assert_eq!(layout[1].kind, ElementKind::Table);

    let fast = partition_pdf(Path::new("prices.pdf"), &backend, Strategy::Fast).unwrap();
    assert_eq!(fast[1].kind, ElementKind::NarrativeText);
}
