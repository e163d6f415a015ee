//! Common regex patterns for receipt field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Vendor patterns
    pub static ref VENDOR_CAPITALIZED: Regex = Regex::new(
        r"^[A-Z][A-Za-z\s&]{2,30}$"
    ).unwrap();

    pub static ref VENDOR_ALL_CAPS: Regex = Regex::new(
        r"^[A-Z\s]{3,30}$"
    ).unwrap();

    pub static ref BUSINESS_SUFFIX: Regex = Regex::new(
        r"(?i)\b(STORE|SHOP|MARKET|FARM|SUPPLY|CO|INC|LLC|LTD)\b"
    ).unwrap();

    pub static ref VENDOR_SANITIZE: Regex = Regex::new(
        r"[^a-zA-Z0-9\s&-]"
    ).unwrap();

    pub static ref STARTS_WITH_LETTER: Regex = Regex::new(
        r"^[A-Za-z]"
    ).unwrap();

    // Date patterns, in extraction priority order
    pub static ref DATE_NUMERIC_MDY: Regex = Regex::new(
        r"\b(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2,4})\b"
    ).unwrap();

    pub static ref DATE_NUMERIC_YMD: Regex = Regex::new(
        r"\b(\d{4})[/\-.](\d{1,2})[/\-.](\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_MONTH_DAY: Regex = Regex::new(
        r"(?i)\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+(\d{1,2})[,\s]+(\d{4})\b"
    ).unwrap();

    pub static ref DATE_DAY_MONTH: Regex = Regex::new(
        r"(?i)\b(\d{1,2})\s+(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+(\d{4})\b"
    ).unwrap();

    // Amount lines; applied to lower-cased lines that start with the keyword
    pub static ref TOTAL_LINE: Regex = Regex::new(
        r"total\s*(\d+\.\d{2})"
    ).unwrap();

    pub static ref SUBTOTAL_LINE: Regex = Regex::new(
        r"subtotal\s*(\d+\.\d{2})"
    ).unwrap();

    pub static ref TAX_LINE: Regex = Regex::new(
        r"tax\s*(\d+\.\d{2})"
    ).unwrap();

    // Line items: description, integer quantity, unit price, line total,
    // optional trailing tax-flag letters
    pub static ref ITEM_STRICT: Regex = Regex::new(
        r"^(.+?)\s+(\d+)\s+(\d+\.\d{2})\s+(\d+\.\d{2})\s*[A-Z]*$"
    ).unwrap();

    // Fallback: description followed by a single price at end of line
    pub static ref ITEM_SIMPLE: Regex = Regex::new(
        r"^(.+?)\s+(\d+\.\d{2})$"
    ).unwrap();

    // Lines that are never purchase items: payment/terminal bookkeeping,
    // register metadata, phone numbers, address-shaped lines
    pub static ref ITEM_SKIP_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)^(subtotal|tax|total|debit|credit|cash|change)").unwrap(),
        Regex::new(r"(?i)^(date|time|store|register|cashier|ticket)").unwrap(),
        Regex::new(r"(?i)^(authorization|bank|terminal|cryptogram)").unwrap(),
        Regex::new(r"^\d+\s*-\s*\d+\s*-\s*\d+").unwrap(),
        Regex::new(r"(?i)^[a-z\s]*\d{3,}\s*[a-z\s]*$").unwrap(),
    ];
}
