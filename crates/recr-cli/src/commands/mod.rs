//! CLI subcommands.

pub mod parse;
pub mod scan;

use std::fs;
use std::path::PathBuf;

use console::style;

use recr_core::ExtractedReceipt;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

/// Render the receipt and write it to the output path, or stdout when none.
pub fn write_receipt(
    receipt: &ExtractedReceipt,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(receipt)?,
        OutputFormat::Text => render_summary(receipt),
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            path.display()
        );
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn render_summary(receipt: &ExtractedReceipt) -> String {
    let mut output = String::new();

    output.push_str(&format!("Vendor: {}\n", receipt.vendor));
    output.push_str(&format!("Date: {}\n", receipt.date));
    output.push('\n');

    if !receipt.items.is_empty() {
        output.push_str("Items:\n");
        for item in &receipt.items {
            output.push_str(&format!(
                "  {} x{} @ {} = {} [{}]\n",
                item.description, item.quantity, item.unit_price, item.total, item.category
            ));
        }
        output.push('\n');
    }

    output.push_str("Summary:\n");
    output.push_str(&format!("  Subtotal: {}\n", receipt.subtotal));
    output.push_str(&format!("  Tax:      {}\n", receipt.tax));
    output.push_str(&format!("  Total:    {}\n", receipt.total));
    output.push_str(&format!("\nConfidence: {}\n", receipt.confidence));

    output
}
