//! Input normalization for the bill splitter.
//!
//! Every numeric field arrives as free text from the form. Nothing in this
//! module fails: unparseable input degrades to 0 and out-of-range values are
//! clamped to the nearest valid boundary.

/// Coerce a currency-like string ("$1,234.56", "12,5", " 40 ") into a
/// non-finite-safe number.
///
/// Strips everything except digits, `.`, `,` and `-`, treats the first `,`
/// as a decimal-separator fallback, then parses the longest leading float
/// prefix. Returns 0.0 when nothing numeric is left.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    let cleaned = cleaned.replacen(',', ".", 1);

    let n = parse_float_prefix(&cleaned);
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Parse the longest prefix of `s` that forms a simple float literal
/// (optional sign, digits, at most one dot). Empty or digit-less prefixes
/// yield 0.0.
fn parse_float_prefix(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && bytes[end] == b'-' {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return 0.0;
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}

/// Standard clamp, used for tax/tip percentages and similar bounded inputs.
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}

/// Participant count from a raw field: floored, never below 1.
pub fn people_count(raw: &str) -> u32 {
    parse_amount(raw).max(1.0).floor() as u32
}

/// Round to a fixed number of decimal places (half away from zero).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round up to a fixed number of decimal places.
pub fn ceil_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).ceil() / factor
}

/// Render a value with a fixed number of decimals for field back-fill.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, value)
}
