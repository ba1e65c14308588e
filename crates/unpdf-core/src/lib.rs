pub mod backend;
pub mod element;
pub mod error;
pub mod extract;
pub mod output;
pub mod partition;

pub use backend::{PageText, PdfBackend, Strategy};
pub use element::{Element, ElementKind};
pub use error::UnpdfError;
pub use extract::{extract, extract_text, join_element_texts};
pub use output::error_json;
pub use partition::partition_pdf;
