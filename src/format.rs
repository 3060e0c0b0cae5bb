//! Rendering of evaluation results for the display.

/// Text shown in place of a result when evaluation fails
pub const ERROR_MARKER: &str = "Error";

/// Default number of decimal places kept for non-integral results
pub const DEFAULT_PRECISION: usize = 8;

/// Format `value` for the display.
///
/// Integral values are written without a fractional part. Other values are
/// rounded to `precision` decimal places, and trailing zeros are removed.
///
/// # Examples
///
/// ```
/// use calcpad::format_number;
///
/// assert_eq!(format_number(1024.0, 8), "1024");
/// assert_eq!(format_number(0.1 + 0.2, 8), "0.3");
/// assert_eq!(format_number(2.0 / 3.0, 4), "0.6667");
/// ```
#[must_use]
pub fn format_number(value: f64, precision: usize) -> String {
    if value == 0.0 {
        // also covers -0.0
        return "0".into();
    }
    if value.fract() == 0.0 {
        return format!("{}", value);
    }
    let fixed = format!("{:.*}", precision, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".into()
    } else {
        trimmed.into()
    }
}

/// Get the last `width` characters of `text`, i.e. the part of the buffer a
/// display of `width` cells shows once scrolled to the end.
///
/// # Examples
///
/// ```
/// use calcpad::tail;
///
/// assert_eq!(tail("12345*sin(", 4), "sin(");
/// assert_eq!(tail("42", 4), "42");
/// ```
#[must_use]
pub fn tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    match text.char_indices().nth(count - width) {
        Some((index, _)) => &text[index..],
        None => "",
    }
}
