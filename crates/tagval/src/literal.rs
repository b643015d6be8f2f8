//! Literal parsing for validator arguments
//!
//! Validator arguments arrive as raw text (`"10"`, `"true"`, `"1h30m"`).
//! This module turns that text into typed values. It is intentionally strict:
//! anything that does not parse is reported as `None` and the caller turns
//! that into a syntax error.
//!
//! Copyright (c) 2025 Tagval Team
//! Licensed under the Apache-2.0 license

const NANOSECOND: u128 = 1;
const MICROSECOND: u128 = 1_000 * NANOSECOND;
const MILLISECOND: u128 = 1_000 * MICROSECOND;
const SECOND: u128 = 1_000 * MILLISECOND;
const MINUTE: u128 = 60 * SECOND;
const HOUR: u128 = 60 * MINUTE;

/// Parse a boolean literal.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parse a base-10 signed integer, optionally prefixed by `+` or `-`.
pub fn parse_int(text: &str) -> Option<i64> {
    text.parse().ok()
}

/// Parse a base-10 unsigned integer. A leading sign is rejected.
pub fn parse_uint(text: &str) -> Option<u64> {
    if text.starts_with('+') {
        return None;
    }
    text.parse().ok()
}

/// Parse a floating point literal.
pub fn parse_float(text: &str) -> Option<f64> {
    text.parse().ok()
}

/// Parse a duration literal into signed nanoseconds.
///
/// The grammar is a possibly signed sequence of decimal numbers, each with
/// an optional fraction and a mandatory unit suffix, such as `300ms`,
/// `-1.5h` or `2h45m`. Valid units are `ns`, `us` (or `µs`), `ms`, `s`,
/// `m` and `h`. A bare `0` is accepted. Values outside the signed 64-bit
/// nanosecond range are rejected.
pub fn parse_duration(text: &str) -> Option<i128> {
    let mut rest = text;
    let mut negative = false;

    if let Some(first) = rest.bytes().next() {
        if first == b'-' || first == b'+' {
            negative = first == b'-';
            rest = &rest[1..];
        }
    }

    if rest == "0" {
        return Some(0);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let first = rest.as_bytes()[0];
        if !(first == b'.' || first.is_ascii_digit()) {
            return None;
        }

        let (whole, after_whole) = leading_int(rest)?;
        let had_whole = after_whole.len() != rest.len();
        rest = after_whole;

        let mut fraction = 0u128;
        let mut scale = 1u128;
        let mut had_fraction = false;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (f, s, after_fraction) = leading_fraction(after_dot);
            had_fraction = after_fraction.len() != after_dot.len();
            fraction = f;
            scale = s;
            rest = after_fraction;
        }
        if !had_whole && !had_fraction {
            return None;
        }

        let unit_len = rest
            .bytes()
            .position(|b| b == b'.' || b.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return None;
        }
        let unit = unit_nanos(&rest[..unit_len])?;
        rest = &rest[unit_len..];

        let mut value = whole.checked_mul(unit)?;
        if fraction > 0 {
            // Precision loss is acceptable here; it matches float scaling.
            value += (fraction as f64 * (unit as f64 / scale as f64)) as u128;
        }
        total = total.checked_add(value)?;
        if total > i64::MAX as u128 + 1 {
            return None;
        }
    }

    if negative {
        Some(-(total as i128))
    } else if total > i64::MAX as u128 {
        None
    } else {
        Some(total as i128)
    }
}

/// Render signed nanoseconds in the conventional `1h2m3.5s` form.
pub fn format_duration(nanos: i128) -> String {
    if nanos == 0 {
        return "0s".to_string();
    }

    let sign = if nanos < 0 { "-" } else { "" };
    let magnitude = nanos.unsigned_abs();

    if magnitude < SECOND {
        let body = if magnitude < MICROSECOND {
            format!("{}ns", magnitude)
        } else if magnitude < MILLISECOND {
            format!("{}µs", format_fraction(magnitude, 3))
        } else {
            format!("{}ms", format_fraction(magnitude, 6))
        };
        return format!("{}{}", sign, body);
    }

    let hours = magnitude / HOUR;
    let minutes = (magnitude % HOUR) / MINUTE;
    let seconds = format_fraction(magnitude % MINUTE, 9);

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, seconds)
    } else {
        format!("{}{}s", sign, seconds)
    }
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "µs" | "μs" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Consume leading decimal digits. Fails on overflow.
fn leading_int(text: &str) -> Option<(u128, &str)> {
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());

    let mut value: u128 = 0;
    for digit in text[..end].bytes() {
        value = value.checked_mul(10)?.checked_add(u128::from(digit - b'0'))?;
        if value > i64::MAX as u128 + 1 {
            return None;
        }
    }
    Some((value, &text[end..]))
}

/// Consume leading fraction digits, returning the digits as an integer and
/// the power of ten they are scaled by. Digits past the representable range
/// are consumed but ignored.
fn leading_fraction(text: &str) -> (u128, u128, &str) {
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());

    let mut value: u128 = 0;
    let mut scale: u128 = 1;
    let mut overflow = false;
    for digit in text[..end].bytes() {
        if overflow {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(digit - b'0')))
        {
            Some(next) if next <= i64::MAX as u128 => {
                value = next;
                scale *= 10;
            }
            _ => overflow = true,
        }
    }
    (value, scale, &text[end..])
}

/// Format `value / 10^precision` dropping trailing zeros of the fraction.
fn format_fraction(value: u128, precision: u32) -> String {
    let divisor = 10u128.pow(precision);
    let whole = value / divisor;
    let fraction = value % divisor;
    if fraction == 0 {
        return whole.to_string();
    }

    let digits = format!("{:0width$}", fraction, width = precision as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}
