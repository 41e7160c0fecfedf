//! Row parsing: one CSV field into two integer operands.
//!
//! Input files store both operands concatenated in the first CSV field,
//! separated by `;` (e.g. `"72;-58"`). Parsing is deliberately permissive,
//! matching the legacy data format: each part is trimmed and coerced with a
//! truncating integer conversion, so `"12abc"` reads as 12 and `"abc"` as 0.
//! A row whose first field lacks the `;` separator reads the missing second
//! operand as 0.

/// Split the first CSV field into two operands.
pub fn parse_row(field: &str) -> (i64, i64) {
    let mut parts = field.splitn(2, ';');
    let value1 = lenient_int(parts.next().unwrap_or(""));
    let value2 = lenient_int(parts.next().unwrap_or(""));
    (value1, value2)
}

/// Truncating string-to-integer coercion: trim surrounding whitespace, then
/// parse the longest leading `[+-]?[0-9]+` prefix. Anything else is 0.
fn lenient_int(value: &str) -> i64 {
    let trimmed = value.trim();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    trimmed[..end].parse().unwrap_or(0)
}
