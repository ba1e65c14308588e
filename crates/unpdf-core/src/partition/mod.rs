pub mod classify;

use crate::backend::{PageText, PdfBackend, Strategy};
use crate::element::Element;
use crate::error::UnpdfError;
use std::path::Path;

/// Partition a PDF into elements, in page order and then reading order.
///
/// All text extraction is delegated to `backend`; this only groups the
/// returned lines into typed blocks.
pub fn partition_pdf(
    path: &Path,
    backend: &dyn PdfBackend,
    strategy: Strategy,
) -> Result<Vec<Element>, UnpdfError> {
    let pages = backend.extract_pages(path, strategy)?;
    let elements = partition_pages(&pages, strategy);

    tracing::debug!(
        backend = backend.backend_name(),
        pages = pages.len(),
        elements = elements.len(),
        "partitioned PDF"
    );

    Ok(elements)
}

/// Partition already-extracted page text into elements.
pub fn partition_pages(pages: &[PageText], strategy: Strategy) -> Vec<Element> {
    pages
        .iter()
        .flat_map(|page| {
            split_blocks(&page.text)
                .into_iter()
                .flat_map(move |block| classify::classify_block(&block, page.page_number, strategy))
        })
        .collect()
}

/// Split page text into blocks separated by whitespace-only lines.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
