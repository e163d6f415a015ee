//! Amount extraction and reconciliation for receipts.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{SUBTOTAL_LINE, TAX_LINE, TOTAL_LINE};

/// The subtotal/tax/total triple parsed from a receipt.
///
/// Any subset may be populated by the scan; reconciliation fills in what can
/// be derived from the rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptAmounts {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Scan each line independently for labeled amounts, then reconcile.
///
/// A line counts when, lower-cased, it starts with the label and carries a
/// decimal amount after it. Reconciliation only runs when a total was found:
/// missing subtotal derives from total minus tax, missing tax from
/// total minus subtotal, and a lone total doubles as the subtotal.
pub fn extract_amounts(lines: &[&str]) -> ReceiptAmounts {
    let mut amounts = ReceiptAmounts::default();

    for line in lines {
        let lower = line.to_lowercase();
        let lower = lower.trim();
        if !lower.contains('.') {
            continue;
        }

        if lower.starts_with("total") {
            if let Some(value) = capture_amount(&TOTAL_LINE, lower) {
                amounts.total = value;
                continue;
            }
        }

        if lower.starts_with("subtotal") {
            if let Some(value) = capture_amount(&SUBTOTAL_LINE, lower) {
                amounts.subtotal = value;
                continue;
            }
        }

        if lower.starts_with("tax") {
            if let Some(value) = capture_amount(&TAX_LINE, lower) {
                amounts.tax = value;
            }
        }
    }

    reconcile(amounts)
}

fn capture_amount(pattern: &regex::Regex, line: &str) -> Option<Decimal> {
    let caps = pattern.captures(line)?;
    Decimal::from_str(&caps[1]).ok()
}

fn reconcile(mut amounts: ReceiptAmounts) -> ReceiptAmounts {
    if amounts.total > Decimal::ZERO {
        if amounts.tax > Decimal::ZERO && amounts.subtotal.is_zero() {
            amounts.subtotal = (amounts.total - amounts.tax).max(Decimal::ZERO);
        } else if amounts.subtotal > Decimal::ZERO && amounts.tax.is_zero() {
            amounts.tax = (amounts.total - amounts.subtotal).max(Decimal::ZERO);
        } else if amounts.subtotal.is_zero() && amounts.tax.is_zero() {
            amounts.subtotal = amounts.total;
        }
    }
    amounts
}
