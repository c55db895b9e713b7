//! Exact assembly of hexadecimal floating-point literals.
//!
//! A hex float `0xH.HHHpE` denotes `digits × 2^(E - 4·fraction_len)`
//! exactly. Building the IEEE-754 encoding needs no decimal rounding: the
//! significand is collected into a `u64`, then rounded once (half to even)
//! at the precision of the target format, with subnormals handled by the
//! same step.

/// Parameters of an IEEE-754 binary interchange format.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FloatFormat {
    /// Significand precision in bits, hidden bit included.
    pub precision: u32,
    /// Exponent of the smallest normal number (also the subnormal scale).
    pub min_exp: i64,
    /// Exponent of the largest finite number; equals the exponent bias.
    pub max_exp: i64,
    /// Width of the biased exponent field.
    pub exponent_bits: u32,
}

impl FloatFormat {
    pub const BINARY32: FloatFormat = FloatFormat {
        precision: 24,
        min_exp: -126,
        max_exp: 127,
        exponent_bits: 8,
    };

    pub const BINARY64: FloatFormat = FloatFormat {
        precision: 53,
        min_exp: -1022,
        max_exp: 1023,
        exponent_bits: 11,
    };

    /// Stored fraction bits (precision minus the hidden bit).
    #[inline]
    pub const fn fraction_bits(self) -> u32 {
        self.precision - 1
    }
}

/// A nonzero value that does not survive rounding into the format.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum OutOfRange {
    /// Rounds to infinity.
    Overflow,
    /// Rounds to zero.
    Underflow,
}

/// Any exponent beyond this is far outside every format's range; clamping
/// keeps the exponent arithmetic below free of overflow.
const EXPONENT_CLAMP: i64 = 1 << 40;

/// Encode `digits × 2^(exponent - 4·fraction_len)` in `format`.
///
/// `digits` are hex digit bytes, integer and fraction parts concatenated.
/// Returns the IEEE-754 bit pattern (sign bit clear), or the direction in
/// which a nonzero value left the representable range.
pub(crate) fn assemble(
    digits: &[u8],
    fraction_len: usize,
    exponent: i64,
    format: FloatFormat,
) -> Result<u64, OutOfRange> {
    // Keep at most 60 significant bits; later digits only feed `sticky`.
    let mut significand: u64 = 0;
    let mut dropped: i64 = 0;
    let mut sticky = false;
    for &b in digits.iter().skip_while(|&&b| b == b'0') {
        let digit = hex_digit_value(b);
        if significand >> 60 == 0 {
            significand = (significand << 4) | digit;
        } else {
            sticky |= digit != 0;
            dropped += 1;
        }
    }
    if significand == 0 {
        return Ok(0);
    }

    let fraction_len = i64::try_from(fraction_len).unwrap_or(EXPONENT_CLAMP);
    let exponent = exponent.clamp(-EXPONENT_CLAMP, EXPONENT_CLAMP)
        - 4 * fraction_len.min(EXPONENT_CLAMP)
        + 4 * dropped.min(EXPONENT_CLAMP);
    // value = significand × 2^exponent

    let precision = i64::from(format.precision);
    let width = i64::from(u64::BITS - significand.leading_zeros());
    let top = exponent + width - 1;
    let mut quantum = top.max(format.min_exp) - (precision - 1);
    let shift = quantum - exponent;

    let mut rounded = if shift <= 0 {
        // Exact: fewer significant bits than the format holds.
        significand << (-shift)
    } else {
        round_half_even(significand, shift, sticky)
    };
    if rounded == 1 << format.precision {
        rounded >>= 1;
        quantum += 1;
    }
    if rounded == 0 {
        return Err(OutOfRange::Underflow);
    }

    let hidden = 1u64 << format.fraction_bits();
    if rounded < hidden {
        // Subnormal: biased exponent field is zero.
        return Ok(rounded);
    }
    let unbiased = quantum + precision - 1;
    if unbiased > format.max_exp {
        return Err(OutOfRange::Overflow);
    }
    let biased = (unbiased + format.max_exp).unsigned_abs();
    Ok((biased << format.fraction_bits()) | (rounded & (hidden - 1)))
}

/// Drop the low `shift` bits of `value`, rounding half to even.
///
/// `sticky` records nonzero bits already discarded below `value`'s lowest
/// bit; it breaks exact ties upward.
fn round_half_even(value: u64, shift: i64, sticky: bool) -> u64 {
    if shift > 64 {
        // Everything is below half of the retained unit.
        return 0;
    }
    let shift = u32::try_from(shift).unwrap_or(64);
    let wide = u128::from(value);
    let kept = wide >> shift;
    let rest = wide & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    let round_up = rest > half || (rest == half && (sticky || kept & 1 == 1));
    u64::try_from(kept + u128::from(round_up)).unwrap_or(u64::MAX)
}

#[inline]
fn hex_digit_value(b: u8) -> u64 {
    let value = match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    };
    u64::from(value)
}

/// Java `Double.toHexString` / `Float.toHexString` rendering of `bits`.
///
/// Normal values print as `0x1.<fraction>p<exp>`, subnormals as
/// `0x0.<fraction>p<min_exp>`, zero as `0x0.0p0`. Trailing zero digits of
/// the fraction are trimmed, keeping at least one.
pub(crate) fn to_hex_string(bits: u64, format: FloatFormat) -> String {
    let fraction_bits = format.fraction_bits();
    let exponent_mask = (1u64 << format.exponent_bits) - 1;

    let negative = (bits >> (fraction_bits + format.exponent_bits)) & 1 == 1;
    let biased = (bits >> fraction_bits) & exponent_mask;
    let fraction = bits & ((1u64 << fraction_bits) - 1);
    let sign = if negative { "-" } else { "" };

    if biased == exponent_mask {
        return if fraction == 0 {
            format!("{sign}Infinity")
        } else {
            "NaN".to_string()
        };
    }
    if biased == 0 && fraction == 0 {
        return format!("{sign}0x0.0p0");
    }

    // Left-align the fraction on a nibble boundary.
    let pad = (4 - fraction_bits % 4) % 4;
    let nibbles = ((fraction_bits + pad) / 4) as usize;
    let hex = format!("{:0nibbles$x}", fraction << pad);
    let trimmed = hex.trim_end_matches('0');
    let hex = if trimmed.is_empty() { "0" } else { trimmed };

    if biased == 0 {
        format!("{sign}0x0.{hex}p{}", format.min_exp)
    } else {
        let unbiased = i64::try_from(biased).unwrap_or(0) - format.max_exp;
        format!("{sign}0x1.{hex}p{unbiased}")
    }
}
