//! Vendor extraction from the top of a receipt.

use super::patterns::{
    BUSINESS_SUFFIX, STARTS_WITH_LETTER, VENDOR_ALL_CAPS, VENDOR_CAPITALIZED, VENDOR_SANITIZE,
};

/// Placeholder when no line at the top of the receipt qualifies as a vendor.
pub const UNKNOWN_VENDOR: &str = "Unknown Vendor";

/// Scan the first lines of a receipt for the vendor name.
///
/// A line qualifies on a capitalized-name pattern, an all-caps pattern, or a
/// business-suffix keyword; the first qualifying line in the top 5 wins. When
/// nothing qualifies, the first plausible line in the top 3 is used instead.
pub fn extract_vendor(lines: &[&str]) -> String {
    for line in lines.iter().take(5) {
        if line.len() < 3 || line.len() > 50 {
            continue;
        }
        if VENDOR_CAPITALIZED.is_match(line)
            || VENDOR_ALL_CAPS.is_match(line)
            || BUSINESS_SUFFIX.is_match(line)
        {
            return sanitize(line);
        }
    }

    // Fallback: first substantial line
    for line in lines.iter().take(3) {
        if line.len() >= 3 && line.len() <= 30 && STARTS_WITH_LETTER.is_match(line) {
            return sanitize(line);
        }
    }

    UNKNOWN_VENDOR.to_string()
}

fn sanitize(line: &str) -> String {
    VENDOR_SANITIZE.replace_all(line, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_caps_vendor() {
        let lines = vec!["FARM SUPPLY CO", "09/15/2024"];
        assert_eq!(extract_vendor(&lines), "FARM SUPPLY CO");
    }

    #[test]
    fn test_capitalized_vendor() {
        let lines = vec!["Greenfield Nursery", "123 Main St"];
        assert_eq!(extract_vendor(&lines), "Greenfield Nursery");
    }

    #[test]
    fn test_business_suffix_qualifies_and_sanitizes() {
        // The apostrophe disqualifies the name patterns but FARM qualifies
        // the line; sanitization then strips the apostrophe.
        let lines = vec!["JOE'S FARM SUPPLY"];
        assert_eq!(extract_vendor(&lines), "JOES FARM SUPPLY");
    }

    #[test]
    fn test_fallback_to_first_substantial_line() {
        let lines = vec!["123456", "bobs produce stand"];
        assert_eq!(extract_vendor(&lines), "bobs produce stand");
    }

    #[test]
    fn test_unknown_vendor() {
        let lines = vec!["12", "#!"];
        assert_eq!(extract_vendor(&lines), UNKNOWN_VENDOR);
        assert_eq!(extract_vendor(&[]), UNKNOWN_VENDOR);
    }

    #[test]
    fn test_vendor_beyond_first_five_lines_is_ignored() {
        let lines = vec!["12", "34", "56", "78", "90", "FARM SUPPLY CO"];
        assert_eq!(extract_vendor(&lines), UNKNOWN_VENDOR);
    }
}
