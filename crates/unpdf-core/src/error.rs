use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum UnpdfError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
