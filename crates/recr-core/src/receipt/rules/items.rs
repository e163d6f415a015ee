//! Line-item extraction from receipt lines.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::receipt::LineItem;

use super::category::categorize_item;
use super::patterns::{ITEM_SIMPLE, ITEM_SKIP_PATTERNS, ITEM_STRICT};

/// Extract purchase lines in two passes.
///
/// The strict pass wants the full tabular shape (description, quantity, unit
/// price, line total). Only when it finds nothing does the lenient pass run,
/// accepting any substantial description followed by a single price.
pub fn extract_line_items(lines: &[&str]) -> Vec<LineItem> {
    let candidates: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| !is_excluded(line))
        .collect();

    let items: Vec<LineItem> = candidates.iter().filter_map(|l| parse_strict(l)).collect();
    if !items.is_empty() {
        return items;
    }

    candidates.iter().filter_map(|l| parse_lenient(l)).collect()
}

fn is_excluded(line: &str) -> bool {
    ITEM_SKIP_PATTERNS.iter().any(|pattern| pattern.is_match(line))
}

fn parse_strict(line: &str) -> Option<LineItem> {
    let caps = ITEM_STRICT.captures(line)?;
    let description = caps[1].trim().to_string();
    let quantity = caps[2]
        .parse::<i64>()
        .ok()
        .map(Decimal::from)
        .unwrap_or(Decimal::ONE);
    let unit_price = Decimal::from_str(&caps[3]).ok()?;
    let total = Decimal::from_str(&caps[4]).ok()?;

    let lower = description.to_lowercase();
    if description.len() <= 3
        || total <= Decimal::ZERO
        || lower.contains("total")
        || lower.contains("subtotal")
        || lower.contains("tax")
    {
        return None;
    }

    Some(LineItem {
        category: categorize_item(&description),
        description,
        quantity,
        unit_price,
        total,
    })
}

fn parse_lenient(line: &str) -> Option<LineItem> {
    let caps = ITEM_SIMPLE.captures(line)?;
    let description = caps[1].trim().to_string();
    let price = Decimal::from_str(&caps[2]).ok()?;

    let lower = description.to_lowercase();
    if description.len() <= 5
        || price <= Decimal::ZERO
        || !description.chars().any(|c| c.is_ascii_uppercase())
        || lower.contains("card")
        || lower.contains("reference")
    {
        return None;
    }

    Some(LineItem {
        category: categorize_item(&description),
        description,
        quantity: Decimal::ONE,
        unit_price: price,
        total: price,
    })
}
