use crate::backend::{PdfBackend, Strategy};
use crate::element::Element;
use crate::error::UnpdfError;
use crate::output::error_json;
use crate::partition::partition_pdf;
use std::path::Path;

/// Separator placed between element texts: one blank line.
pub const ELEMENT_SEPARATOR: &str = "\n\n";

/// Extract the plain text of the PDF at `path`.
///
/// Elements whose text is empty after trimming are skipped; the rest are
/// joined untrimmed, in partition order, with [`ELEMENT_SEPARATOR`].
pub fn extract(path: &Path, backend: &dyn PdfBackend, strategy: Strategy) -> Result<String, UnpdfError> {
    let elements = partition_pdf(path, backend, strategy)?;
    Ok(join_element_texts(&elements))
}

/// Like [`extract`], but a failure is folded into `{"error": "<message>"}`.
///
/// Success and failure share the return type, so a caller can only tell
/// them apart by parsing the output. Use [`extract`] when that matters.
pub fn extract_text(path: &Path, backend: &dyn PdfBackend, strategy: Strategy) -> String {
    match extract(path, backend, strategy) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "extraction failed");
            error_json(&e.to_string())
        }
    }
}

pub fn join_element_texts(elements: &[Element]) -> String {
    elements
        .iter()
        .filter(|el| !el.is_blank())
        .map(|el| el.to_string())
        .collect::<Vec<_>>()
        .join(ELEMENT_SEPARATOR)
}
