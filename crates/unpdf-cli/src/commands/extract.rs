use std::path::PathBuf;
use unpdf_core::backend::pdf_extract::PdfExtractBackend;
use unpdf_core::backend::pdftotext::PdftotextBackend;
use unpdf_core::error::UnpdfError;
use unpdf_core::{PdfBackend, Strategy};

use crate::output;
use crate::{BackendArg, OutputFormat};

pub struct ExtractArgs {
    pub pdf_path: PathBuf,
    pub strategy: Strategy,
    pub backend: BackendArg,
    pub pdftotext_bin: PathBuf,
    pub output: OutputFormat,
    pub strict: bool,
}

pub fn run(args: &ExtractArgs) -> Result<(), UnpdfError> {
    let backend: Box<dyn PdfBackend> = match args.backend {
        BackendArg::Pdftotext => {
            Box::new(PdftotextBackend::new().with_binary(&args.pdftotext_bin))
        }
        BackendArg::PdfExtract => Box::new(PdfExtractBackend::new()),
    };

    match args.output {
        OutputFormat::Text if args.strict => {
            let text = unpdf_core::extract(&args.pdf_path, backend.as_ref(), args.strategy)?;
            println!("{text}");
        }
        OutputFormat::Text => {
            // Failures come back as the error JSON body with exit status 0.
            let text = unpdf_core::extract_text(&args.pdf_path, backend.as_ref(), args.strategy);
            println!("{text}");
        }
        OutputFormat::Json => {
            let elements =
                unpdf_core::partition_pdf(&args.pdf_path, backend.as_ref(), args.strategy)?;
            output::json::print(&elements)?;
        }
    }

    Ok(())
}
