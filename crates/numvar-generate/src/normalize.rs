use chrono::{NaiveDate, NaiveDateTime};

use numvar_core::{OperatorRegistry, NEW_NUMBER_TIP, PHONE_LEN};

/// Date formats accepted when reformatting the tip column. Ordered from
/// most to least specific so datetime values are not half-parsed as dates.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

/// Strict normalization: strip non-digits, drop leading zeros, left-pad to
/// the canonical width. Empty input normalizes to `None`.
pub fn clean_strict(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let trimmed = digits.trim_start_matches('0');
    let value = if trimmed.is_empty() { "0" } else { trimmed };
    Some(format!("{value:0>width$}", width = PHONE_LEN))
}

/// Source normalization: recover a canonical number from a raw source cell.
///
/// Digit runs of at least the canonical width are truncated at a recognized
/// operator prefix when one matches at position 0 (registry scan order
/// decides ties). Without a recognized prefix, a single leading zero is
/// stripped as a best-effort recovery before truncating and padding.
/// Shorter runs are left-padded with zeros. Empty input normalizes to
/// `None`.
pub fn clean_source(raw: &str, registry: &OperatorRegistry) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    if digits.len() >= PHONE_LEN {
        if registry.matched_prefix(&digits).is_some() {
            return Some(digits[..PHONE_LEN].to_string());
        }
        let recovered = digits.strip_prefix('0').unwrap_or(&digits);
        let truncated = &recovered[..recovered.len().min(PHONE_LEN)];
        return Some(format!("{truncated:0>width$}", width = PHONE_LEN));
    }

    Some(format!("{digits:0>width$}", width = PHONE_LEN))
}

/// Reformat a tip cell as `abbreviated-month/year` when it parses as a
/// calendar date. The new-number sentinel and anything unparseable pass
/// through unchanged; this never fails.
pub fn format_tip(tip: &str) -> String {
    if tip == NEW_NUMBER_TIP {
        return tip.to_string();
    }
    match parse_date(tip.trim()) {
        Some(date) => date.format("%b/%Y").to_string(),
        None => tip.to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    for fmt in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(datetime.date());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }
    None
}
