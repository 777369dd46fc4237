//! Text parsing for quantities and conversion phrases
//!
//! Unit text is returned as written; resolving it against the registry is
//! the caller's job.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::types::ParsedConversionRequest;

// "<number> <unit> to <unit>", e.g. "10km to miles", "350 f in celsius", "2,5 l -> cups"
static RE_CONVERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:convert\s+)?([+-]?\d+(?:[.,]\d+)?)\s*(.+?)\s+(?:to|in|into|as|=|->)\s+(.+?)\s*[?.!]?\s*$")
        .expect("Failed to compile conversion pattern")
});

// Number followed by unit (e.g., "12km", "12 km", "12 kilometers")
static RE_AMOUNT_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:[.,]\d+)?)\s*([^\d\s.,].*?)\s*$")
        .expect("Failed to compile amount/unit pattern")
});

// Unit followed by number (e.g., "$ 10", "km12")
static RE_UNIT_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([^\d\s+-][^\d]*?)\s*([+-]?\d+(?:[.,]\d+)?)\s*$")
        .expect("Failed to compile unit/amount pattern")
});

fn parse_amount(raw: &str) -> Option<f64> {
    // Normalize comma decimal separators to dots
    raw.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a conversion phrase such as "10 km to miles".
pub fn parse_conversion(text: &str) -> Option<ParsedConversionRequest> {
    let caps = RE_CONVERSION.captures(text)?;
    let value = parse_amount(&caps[1])?;
    let from_unit = caps[2].trim().to_string();
    let to_unit = caps[3].trim().to_string();

    if from_unit.is_empty() || to_unit.is_empty() {
        return None;
    }

    Some(ParsedConversionRequest {
        value,
        from_unit,
        to_unit,
    })
}

/// Parse a single quantity such as "12 km", "3.5 meters" or "$10".
pub fn parse_quantity(text: &str) -> Option<(f64, String)> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = RE_AMOUNT_UNIT.captures(text) {
        if let Some(amount) = parse_amount(&caps[1]) {
            return Some((amount, caps[2].trim().to_string()));
        }
    }

    if let Some(caps) = RE_UNIT_AMOUNT.captures(text) {
        if let Some(amount) = parse_amount(&caps[2]) {
            return Some((amount, caps[1].trim().to_string()));
        }
    }

    None
}
