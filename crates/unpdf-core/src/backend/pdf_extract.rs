use crate::backend::{ensure_exists, split_pages, PageText, PdfBackend, Strategy};
use crate::error::UnpdfError;
use gag::Gag;
use std::io::{self, Write};
use std::panic;
use std::path::Path;

/// In-process backend built on the `pdf-extract` crate.
///
/// Only supports the fast strategy. A layout request logs a warning and
/// falls back to plain text.
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        PdfExtractBackend
    }
}

impl Default for PdfExtractBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for PdfExtractBackend {
    fn extract_pages(&self, path: &Path, strategy: Strategy) -> Result<Vec<PageText>, UnpdfError> {
        ensure_exists(path)?;

        if strategy == Strategy::Layout {
            tracing::warn!("pdf-extract backend has no layout mode; using fast extraction");
        }

        let bytes = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "running pdf-extract");

        // pdf-extract println!s font diagnostics; stdout carries only our result.
        let gag = Gag::stdout().ok();
        // pdf-extract panics on some malformed documents.
        let result = panic::catch_unwind(|| ::pdf_extract::extract_text_from_mem(&bytes));
        let _ = io::stdout().flush();
        drop(gag);

        let text = result
            .map_err(|payload| UnpdfError::Extraction(panic_message(payload.as_ref())))?
            .map_err(|e| UnpdfError::Extraction(e.to_string()))?;

        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("pdf-extract panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("pdf-extract panicked: {s}")
    } else {
        "pdf-extract panicked".to_string()
    }
}
