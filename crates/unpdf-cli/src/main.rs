mod commands;
mod logging;
mod output;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use unpdf_core::Strategy;

const USAGE: &str = "Usage: extract_pdf <pdf_path>";

/// Exit status for an extraction error under `--strict`.
const STRICT_FAILURE: i32 = 2;

#[derive(Parser)]
#[command(
    name = "extract_pdf",
    version,
    about = "Extract plain text from a PDF file",
    after_help = "Use `--` before a path that starts with '-': extract_pdf -- -scan.pdf"
)]
struct Cli {
    /// Path to the PDF file
    pdf_path: PathBuf,

    /// Extraction strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Fast, env = "UNPDF_STRATEGY")]
    strategy: StrategyArg,

    /// Extraction engine
    #[arg(long, value_enum, default_value_t = BackendArg::Pdftotext, env = "UNPDF_BACKEND")]
    backend: BackendArg,

    /// pdftotext executable to run
    #[arg(
        long = "pdftotext-bin",
        value_name = "PATH",
        default_value = "pdftotext",
        env = "UNPDF_PDFTOTEXT"
    )]
    pdftotext_bin: PathBuf,

    /// Output format: text (default) or json (one object per element)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Exit with status 2 when extraction fails
    #[arg(long)]
    strict: bool,

    /// Log more to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Fast,
    Layout,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Fast => Strategy::Fast,
            StrategyArg::Layout => Strategy::Layout,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BackendArg {
    Pdftotext,
    PdfExtract,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", unpdf_core::error_json(USAGE));
                std::process::exit(1);
            }
        },
    };

    logging::init(cli.verbose);

    let args = commands::extract::ExtractArgs {
        pdf_path: cli.pdf_path,
        strategy: cli.strategy.into(),
        backend: cli.backend,
        pdftotext_bin: cli.pdftotext_bin,
        output: cli.output,
        strict: cli.strict,
    };

    // Errors reaching here come from --strict or --output json.
    if let Err(e) = commands::extract::run(&args) {
        tracing::error!(path = %args.pdf_path.display(), error = %e, "extraction failed");
        println!("{}", unpdf_core::error_json(&e.to_string()));
        if args.strict {
            std::process::exit(STRICT_FAILURE);
        }
    }
}
