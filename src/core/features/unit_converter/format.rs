/// Significant digits used when presenting conversion results.
pub const DISPLAY_SIGNIFICANT_DIGITS: u32 = 5;

/// Round `value` to `digits` significant digits.
///
/// Zero, non-finite values and `digits == 0` are returned unchanged.
pub fn round_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() || digits == 0 {
        return value;
    }

    let magnitude = value.abs().log10().floor() as i32;
    let shift = digits as i32 - 1 - magnitude;

    // Subnormals would overflow the scale
    if shift > 300 {
        return value;
    }

    if shift >= 0 {
        let scale = 10f64.powi(shift);
        (value * scale).round() / scale
    } else {
        // Divide instead of multiplying by an inexact negative power
        let scale = 10f64.powi(-shift);
        (value / scale).round() * scale
    }
}

// Helper to add thousands separators to a string of digits
fn add_thousands_separators(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().rev().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result.chars().rev().collect()
}

// Format number with thousands separators at display precision
// Examples: 130000.0 -> "130,000", 6.2137119 -> "6.2137", 0.000123456 -> "0.00012346"
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞".to_string() } else { "-∞".to_string() };
    }

    let rounded = round_significant(value, DISPLAY_SIGNIFICANT_DIGITS);
    // f64 Display never uses exponent notation and has no trailing zeros
    let text = rounded.to_string();

    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };

    match digits.split_once('.') {
        Some((integer, fraction)) => {
            format!("{}{}.{}", sign, add_thousands_separators(integer), fraction)
        }
        None => format!("{}{}", sign, add_thousands_separators(digits)),
    }
}
