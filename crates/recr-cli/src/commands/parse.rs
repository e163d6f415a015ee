//! Parse command - extract structured data from recognized receipt text.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use recr_core::ReceiptParser;

use super::{write_receipt, OutputFormat};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file with recognized receipt text
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: ParseArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let text = fs::read_to_string(&args.input)?;
    info!("Parsing receipt text from {}", args.input.display());

    let receipt = ReceiptParser::new().parse(&text);

    write_receipt(&receipt, args.format, args.output.as_ref())
}
