//! Date extraction for receipts.

use chrono::{Datelike, NaiveDate};

use super::patterns::{DATE_DAY_MONTH, DATE_MONTH_DAY, DATE_NUMERIC_MDY, DATE_NUMERIC_YMD};

/// Find the receipt date in the joined text.
///
/// Patterns are tried in priority order: numeric month/day/year, numeric
/// year/month/day, then month-name forms. A match counts only when it parses
/// to a valid date after 2000; otherwise `fallback` (the extraction date) is
/// returned.
pub fn extract_date(text: &str, fallback: NaiveDate) -> NaiveDate {
    numeric_mdy(text)
        .or_else(|| numeric_ymd(text))
        .or_else(|| month_day_year(text))
        .or_else(|| day_month_year(text))
        .unwrap_or(fallback)
}

fn numeric_mdy(text: &str) -> Option<NaiveDate> {
    let caps = DATE_NUMERIC_MDY.captures(text)?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let year = expand_year(caps[3].parse().ok()?);
    valid(NaiveDate::from_ymd_opt(year, month, day))
}

fn numeric_ymd(text: &str) -> Option<NaiveDate> {
    let caps = DATE_NUMERIC_YMD.captures(text)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    valid(NaiveDate::from_ymd_opt(year, month, day))
}

fn month_day_year(text: &str) -> Option<NaiveDate> {
    let caps = DATE_MONTH_DAY.captures(text)?;
    let month = month_number(&caps[1])?;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    valid(NaiveDate::from_ymd_opt(year, month, day))
}

fn day_month_year(text: &str) -> Option<NaiveDate> {
    let caps = DATE_DAY_MONTH.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    valid(NaiveDate::from_ymd_opt(year, month, day))
}

fn valid(date: Option<NaiveDate>) -> Option<NaiveDate> {
    date.filter(|d| d.year() > 2000)
}

fn expand_year(year: i32) -> i32 {
    if year < 100 {
        // Two-digit year: 2000s for 00-50, 1900s for 51-99
        if year <= 50 { 2000 + year } else { 1900 + year }
    } else {
        year
    }
}

fn month_number(name: &str) -> Option<u32> {
    match name.to_lowercase().as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fallback() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn expected() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 15).unwrap()
    }

    #[test]
    fn test_numeric_mdy() {
        assert_eq!(extract_date("09/15/2024", fallback()), expected());
        assert_eq!(extract_date("9-15-2024", fallback()), expected());
        assert_eq!(extract_date("9.15.2024", fallback()), expected());
    }

    #[test]
    fn test_numeric_ymd() {
        assert_eq!(extract_date("2024/09/15", fallback()), expected());
        assert_eq!(extract_date("2024-09-15", fallback()), expected());
    }

    #[test]
    fn test_month_name_forms() {
        assert_eq!(extract_date("Sep 15, 2024", fallback()), expected());
        assert_eq!(extract_date("September 15 2024", fallback()), expected());
        assert_eq!(extract_date("15 Sep 2024", fallback()), expected());
    }

    #[test]
    fn test_two_digit_year_expands_to_2000s() {
        assert_eq!(extract_date("09/15/24", fallback()), expected());
    }

    #[test]
    fn test_old_dates_fall_back() {
        assert_eq!(extract_date("09/15/1999", fallback()), fallback());
    }

    #[test]
    fn test_no_date_falls_back() {
        assert_eq!(extract_date("", fallback()), fallback());
        assert_eq!(extract_date("no date on this receipt", fallback()), fallback());
    }

    #[test]
    fn test_phone_number_is_not_a_date() {
        assert_eq!(extract_date("call 555-123-4567", fallback()), fallback());
    }

    #[test]
    fn test_first_match_wins() {
        let date = extract_date("printed 01/02/2023, valid through 01/02/2026", fallback());
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
    }
}
