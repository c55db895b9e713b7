//! Decoding of recognized literals into typed values.
//!
//! The raw scanner has already validated the grammar and located every digit
//! run. Decoding strips separators, computes the exact value for the literal's
//! kind, and reports the range errors that only the value can reveal.

use jlit_core::{Exponent, NumericKind, Radix, RawLiteral, SourceBuffer};

use crate::hex_float::{self, FloatFormat, OutOfRange};
use crate::{LiteralToken, LiteralValue, ScanError, Span};

/// Turn a recognized literal into a decoded token.
///
/// `negated` is recorded on the token and never affects the value: decimal
/// integers are range-checked against the kind's positive maximum whether
/// or not a unary minus precedes them.
pub(crate) fn cook(
    raw: &RawLiteral,
    buffer: &SourceBuffer,
    negated: bool,
) -> Result<LiteralToken, ScanError> {
    let source = buffer.as_bytes();
    let span = Span::new(raw.start, raw.end());

    let mut digits: String = raw.integer.digits(source).map(char::from).collect();
    let point = raw.fraction.map(|fraction| {
        let point = digits.len();
        digits.extend(fraction.digits(source).map(char::from));
        point
    });
    let exponent = raw.exponent.map(|e| exponent_value(e, source));

    let value = if raw.kind.is_integral() {
        cook_integral(raw.radix, raw.kind, &digits, span)?
    } else if raw.radix == Radix::Hex {
        cook_hex_float(raw.kind, &digits, point, exponent.unwrap_or(0), span)?
    } else {
        cook_decimal_float(raw.kind, &digits, point, exponent, span)?
    };
    debug_assert_eq!(value.kind(), raw.kind);

    Ok(LiteralToken {
        radix: raw.radix,
        kind: raw.kind,
        raw_text: buffer.slice(raw.start, raw.end()).to_owned(),
        digits,
        point,
        exponent,
        value,
        negated,
        span,
    })
}

/// Exponent digits as a signed value, saturating at the `i64` range.
fn exponent_value(exponent: Exponent, source: &[u8]) -> i64 {
    let magnitude = exponent.digits.digits(source).fold(0i64, |acc, b| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(b.wrapping_sub(b'0')))
    });
    if exponent.negative {
        -magnitude
    } else {
        magnitude
    }
}

// ─── Integers ──────────────────────────────────────────────────────

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    reason = "keeping the low bits as two's complement is the literal's meaning"
)]
fn cook_integral(
    radix: Radix,
    kind: NumericKind,
    digits: &str,
    span: Span,
) -> Result<LiteralValue, ScanError> {
    let bits = match radix.bits_per_digit() {
        Some(width) => wrapping_bits(digits, width),
        None => decimal_magnitude(digits, kind)
            .ok_or_else(|| ScanError::magnitude_overflow(span, kind))?,
    };
    Ok(match kind {
        NumericKind::Long => LiteralValue::Long(bits as i64),
        _ => LiteralValue::Int(bits as u32 as i32),
    })
}

/// Accumulate digits of a power-of-two radix, discarding bits shifted out
/// past the top of a `u64`.
fn wrapping_bits(digits: &str, width: u32) -> u64 {
    digits
        .bytes()
        .fold(0u64, |acc, b| (acc << width) | digit_value(b))
}

/// Magnitude of a decimal integer, or `None` when it exceeds the kind's
/// positive maximum.
fn decimal_magnitude(digits: &str, kind: NumericKind) -> Option<u64> {
    let max = match kind {
        NumericKind::Long => u64::MAX >> 1,
        _ => u64::from(u32::MAX >> 1),
    };
    let mut magnitude: u64 = 0;
    for b in digits.bytes() {
        magnitude = magnitude.checked_mul(10)?.checked_add(digit_value(b))?;
        if magnitude > max {
            return None;
        }
    }
    Some(magnitude)
}

#[inline]
fn digit_value(b: u8) -> u64 {
    u64::from(char::from(b).to_digit(16).unwrap_or(0))
}

// ─── Floating Point ────────────────────────────────────────────────

#[allow(
    clippy::cast_possible_truncation,
    reason = "binary32 encodings occupy the low 32 bits"
)]
fn cook_hex_float(
    kind: NumericKind,
    digits: &str,
    point: Option<usize>,
    exponent: i64,
    span: Span,
) -> Result<LiteralValue, ScanError> {
    let fraction_len = point.map_or(0, |point| digits.len() - point);
    let format = match kind {
        NumericKind::Float => FloatFormat::BINARY32,
        _ => FloatFormat::BINARY64,
    };
    let bits = hex_float::assemble(digits.as_bytes(), fraction_len, exponent, format)
        .map_err(|out| range_error(out, span, kind))?;
    Ok(match kind {
        NumericKind::Float => LiteralValue::Float(f32::from_bits(bits as u32)),
        _ => LiteralValue::Double(f64::from_bits(bits)),
    })
}

/// Decimal floats go through the standard library's correctly rounded
/// parser, once per target width.
fn cook_decimal_float(
    kind: NumericKind,
    digits: &str,
    point: Option<usize>,
    exponent: Option<i64>,
    span: Span,
) -> Result<LiteralValue, ScanError> {
    let (integer, fraction) = digits.split_at(point.unwrap_or(digits.len()));
    let text = format!("{integer}.{fraction}e{}", exponent.unwrap_or(0));
    let nonzero = digits.bytes().any(|b| b != b'0');

    let (value, infinite, zero) = match kind {
        NumericKind::Float => {
            let v: f32 = text
                .parse()
                .map_err(|_| ScanError::empty_digit_sequence(span))?;
            (LiteralValue::Float(v), v.is_infinite(), v == 0.0)
        }
        _ => {
            let v: f64 = text
                .parse()
                .map_err(|_| ScanError::empty_digit_sequence(span))?;
            (LiteralValue::Double(v), v.is_infinite(), v == 0.0)
        }
    };

    if infinite {
        Err(ScanError::magnitude_overflow(span, kind))
    } else if zero && nonzero {
        Err(ScanError::magnitude_underflow(span, kind))
    } else {
        Ok(value)
    }
}

fn range_error(out: OutOfRange, span: Span, kind: NumericKind) -> ScanError {
    match out {
        OutOfRange::Overflow => ScanError::magnitude_overflow(span, kind),
        OutOfRange::Underflow => ScanError::magnitude_underflow(span, kind),
    }
}
