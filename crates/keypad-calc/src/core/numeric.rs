//! Operand parsing and result formatting
//!
//! Both follow what a browser page does with the same text: operands are read
//! with `parseFloat` prefix semantics and results print like a JS number.

/// Parses an operand string.
///
/// The longest leading decimal literal is used, so `"1.2.3"` reads as `1.2`
/// and `"05"` as `5`. Text with no leading digits yields `NaN`.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    let text = text.trim_start();
    let (sign, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };

    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let len = decimal_prefix_len(unsigned);
    if len == 0 {
        return f64::NAN;
    }
    unsigned[..len]
        .parse::<f64>()
        .map_or(f64::NAN, |value| sign * value)
}

/// Length of the leading `digits[.digits][e[+-]digits]` literal, 0 if none
fn decimal_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut digits = 0;
    let mut seen_point = false;

    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one exponent digit follows.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while matches!(bytes.get(exp_end), Some(b'0'..=b'9')) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    end
}

/// Formats a result for the display
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // covers -0.0
        return "0".to_string();
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let s = format!("{n:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    format!("{n}")
}
