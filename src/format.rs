//! pt-BR number formatting for axis ticks and tooltip labels

use crate::aggregate::percentage;

/// Format a count with `.` as the thousands separator (12345 -> "12.345")
///
/// Counts are whole numbers; the value is rounded before grouping.
pub fn format_count(value: f64) -> String {
    let rounded = value.round() as i64;
    let mut buffer = itoa::Buffer::new();
    let digits = buffer.format(rounded.unsigned_abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    let lead = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    out.push_str(&digits[..lead]);
    let mut rest = &digits[lead..];
    while !rest.is_empty() {
        out.push('.');
        out.push_str(&rest[..3]);
        rest = &rest[3..];
    }
    out
}

/// Format a percentage with at most one fraction digit and `,` as the decimal
/// separator (33.333 -> "33,3"; 50.0 -> "50")
pub fn format_percent(value: f64) -> String {
    let tenths = (value * 10.0).round() as i64;
    let whole = tenths / 10;
    let fraction = (tenths % 10).abs();
    if fraction == 0 {
        format_count(whole as f64)
    } else {
        format!("{},{}", format_count(whole as f64), fraction)
    }
}

/// Tooltip line for a count and its share of the total ("1.234 alunos (56,7%)")
pub fn count_tooltip(value: f64, total: f64) -> String {
    format!(
        "{} alunos ({}%)",
        format_count(value),
        format_percent(percentage(value, total))
    )
}
