//! Operand parsing and result formatting.
//!
//! Operands live as strings in the display, so every arithmetic step goes
//! through a parse and a format. Parsing is lenient (longest numeric prefix)
//! and formatting produces the shortest round-trip decimal, switching to
//! exponent notation for very large or very small magnitudes.

/// Maximum number of characters the display may hold.
pub const MAX_DISPLAY_LEN: usize = 15;

/// Display text shown after a failed computation.
pub const ERROR_DISPLAY: &str = "Error";

/// Parse the leading numeric part of an operand string.
///
/// Returns NaN when the string has no numeric prefix (e.g. `"Error"`, `"-"`).
pub fn parse_operand(input: &str) -> f64 {
    let trimmed = input.trim_start();

    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = if rest.starts_with("Infinity") {
        f64::INFINITY
    } else {
        match numeric_prefix(rest) {
            Some(value) => value,
            None => return f64::NAN,
        }
    };

    if negative { -magnitude } else { magnitude }
}

/// Parse `digits [. digits] [e [+-] digits]` from the start of `input`.
fn numeric_prefix(input: &str) -> Option<f64> {
    let bytes = input.as_bytes();
    let count_digits = |from: usize| {
        bytes
            .get(from..)
            .map(|tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
            .unwrap_or(0)
    };

    let int_len = count_digits(0);
    let mut end = int_len;
    let mut frac = "";
    if bytes.get(end) == Some(&b'.') {
        let frac_len = count_digits(end + 1);
        frac = &input[end + 1..end + 1 + frac_len];
        end += 1 + frac_len;
    }

    if int_len == 0 && frac.is_empty() {
        return None;
    }

    let mut exponent = "";
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut digits_start = end + 1;
        if matches!(bytes.get(digits_start), Some(b'+' | b'-')) {
            digits_start += 1;
        }
        let exp_len = count_digits(digits_start);
        if exp_len > 0 {
            exponent = &input[end..digits_start + exp_len];
        }
    }

    let int = if int_len == 0 { "0" } else { &input[..int_len] };
    let frac = if frac.is_empty() { "0" } else { frac };
    format!("{int}.{frac}{exponent}").parse().ok()
}

/// Format a number as its default string form.
///
/// Fixed notation is used while the decimal exponent lies in `[-6, 20]`;
/// outside that range the result uses exponent notation such as `1e+21`
/// or `1.5e-7`. Negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let len = digits.len() as i32;
    // Position of the decimal point relative to the digit string.
    let point = exponent + 1;

    if len <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", exponent.abs())
        } else {
            format!("{first}.{rest}e{sign}{}", exponent.abs())
        }
    }
}

/// Format a computed value for the display, cut to [`MAX_DISPLAY_LEN`].
pub fn format_result(value: f64) -> String {
    truncate_display(&format_number(value))
}

/// Keep at most [`MAX_DISPLAY_LEN`] characters.
fn truncate_display(text: &str) -> String {
    text.chars().take(MAX_DISPLAY_LEN).collect()
}
