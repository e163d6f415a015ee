//! Structured receipt data produced by the field extractor.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Overall extraction quality rating.
///
/// Parse quality is communicated only through this field, never through an
/// error: an unreadable receipt still yields a (mostly empty) record the user
/// can correct by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        };
        f.write_str(label)
    }
}

/// One parsed purchase line from a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description as printed on the receipt.
    pub description: String,

    /// Quantity purchased (defaults to 1 when not printed).
    pub quantity: Decimal,

    /// Price per unit.
    pub unit_price: Decimal,

    /// Line total as printed. Trusted as parsed; not recomputed from
    /// quantity × unit price, so OCR digit noise never discards a line.
    pub total: Decimal,

    /// Expense category from the fixed farm vocabulary.
    pub category: String,
}

/// The structured result of parsing raw recognized text.
///
/// A value object, created once per processed image. Downstream editing works
/// on a copy; this original is retained as provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedReceipt {
    /// Vendor name, or "Unknown Vendor" when no line qualified.
    pub vendor: String,

    /// Receipt date; falls back to the extraction date when no pattern matched.
    pub date: NaiveDate,

    /// Pre-tax amount.
    pub subtotal: Decimal,

    /// Tax amount.
    pub tax: Decimal,

    /// Grand total.
    pub total: Decimal,

    /// Parsed purchase lines, in receipt order.
    pub items: Vec<LineItem>,

    /// The raw recognized text this record was parsed from, kept for audit.
    pub raw_text: String,

    /// Extraction quality rating.
    pub confidence: Confidence,
}
