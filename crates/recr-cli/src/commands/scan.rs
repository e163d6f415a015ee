//! Scan command - recognize and parse a receipt image.

use std::path::PathBuf;

use clap::Args;

use super::OutputFormat;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input image file (PNG, JPEG, TIFF, BMP)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Recognition language
    #[arg(short, long, default_value = "eng")]
    language: String,

    /// Recognition time budget in seconds
    #[arg(short, long, default_value_t = 30)]
    timeout: u64,
}

#[cfg(feature = "tesseract")]
pub async fn run(args: ScanArgs) -> anyhow::Result<()> {
    use std::fs;
    use std::sync::Arc;

    use indicatif::{ProgressBar, ProgressStyle};
    use tracing::info;

    use recr_core::{
        process_receipt_image, ProgressFn, ReceiptImage, ReceiptParser, RecognitionWorker,
        RecognizerConfig,
    };

    use super::write_receipt;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Scanning receipt image: {}", args.input.display());

    let bytes = fs::read(&args.input)?;
    let image = ReceiptImage::from_bytes(bytes)?;

    let config = RecognizerConfig {
        language: args.language.clone(),
        timeout_secs: args.timeout,
        ..Default::default()
    };
    let worker = RecognitionWorker::tesseract(config);
    let parser = ReceiptParser::new();

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );
    pb.set_message("Recognizing text...");

    let bar = pb.clone();
    let progress: ProgressFn = Arc::new(move |pct| bar.set_position(pct as u64));

    let result = process_receipt_image(&worker, &parser, &image, Some(progress)).await;
    worker.terminate().await;

    let receipt = result?;
    pb.finish_with_message("Done");

    write_receipt(&receipt, args.format, args.output.as_ref())
}

#[cfg(not(feature = "tesseract"))]
pub async fn run(_args: ScanArgs) -> anyhow::Result<()> {
    anyhow::bail!(
        "this build has no recognition engine; \
         rebuild with `--features tesseract` to scan images"
    )
}
