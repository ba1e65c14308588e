use crate::backend::{ensure_exists, split_pages, PageText, PdfBackend, Strategy};
use crate::error::UnpdfError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// The fast strategy uses pdftotext's default reading-order output;
/// the layout strategy adds `-layout` to preserve column alignment.
pub struct PdftotextBackend {
    binary: PathBuf,
}

impl PdftotextBackend {
    pub fn new() -> Self {
        PdftotextBackend {
            binary: PathBuf::from("pdftotext"),
        }
    }

    /// Use a specific pdftotext executable instead of the one on `PATH`.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }
}

impl Default for PdftotextBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn command_args(path: &Path, strategy: Strategy) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-enc".into(), "UTF-8".into()];
    if strategy == Strategy::Layout {
        args.push("-layout".into());
    }
    args.push(path.as_os_str().to_os_string());
    args.push("-".into()); // output to stdout
    args
}

impl PdfBackend for PdftotextBackend {
    fn extract_pages(&self, path: &Path, strategy: Strategy) -> Result<Vec<PageText>, UnpdfError> {
        ensure_exists(path)?;

        tracing::debug!(
            binary = %self.binary.display(),
            path = %path.display(),
            %strategy,
            "running pdftotext"
        );

        let output = Command::new(&self.binary)
            .args(command_args(path, strategy))
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    UnpdfError::PdftotextNotFound
                } else {
                    UnpdfError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(UnpdfError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
