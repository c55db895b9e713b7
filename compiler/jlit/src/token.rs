//! Decoded literal tokens.

use jlit_core::{NumericKind, Radix};

use crate::Span;

/// Exact value of a numeric literal.
///
/// Integers hold the literal's two's-complement value *before* any enclosing
/// unary minus is applied. Floats are never negative, infinite or NaN when
/// produced by the scanner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl LiteralValue {
    pub fn kind(&self) -> NumericKind {
        match self {
            LiteralValue::Int(_) => NumericKind::Int,
            LiteralValue::Long(_) => NumericKind::Long,
            LiteralValue::Float(_) => NumericKind::Float,
            LiteralValue::Double(_) => NumericKind::Double,
        }
    }

    /// Raw bit pattern, zero-extended to 64 bits.
    ///
    /// Integers yield their two's-complement encoding and floats their
    /// IEEE-754 encoding, so `Int(-1)` is `0xffff_ffff`.
    #[allow(
        clippy::cast_sign_loss,
        reason = "reinterpreting the two's-complement bit pattern is the intent"
    )]
    pub fn to_bits(&self) -> u64 {
        match *self {
            LiteralValue::Int(v) => u64::from(v as u32),
            LiteralValue::Long(v) => v as u64,
            LiteralValue::Float(v) => u64::from(v.to_bits()),
            LiteralValue::Double(v) => v.to_bits(),
        }
    }

    /// The value negated as Java's unary minus would: wrapping for integers
    /// (`-Int(i32::MIN)` stays `i32::MIN`), sign flip for floats.
    #[must_use]
    pub fn negated(&self) -> Self {
        match *self {
            LiteralValue::Int(v) => LiteralValue::Int(v.wrapping_neg()),
            LiteralValue::Long(v) => LiteralValue::Long(v.wrapping_neg()),
            LiteralValue::Float(v) => LiteralValue::Float(-v),
            LiteralValue::Double(v) => LiteralValue::Double(-v),
        }
    }
}

/// A recognized and decoded numeric literal.
///
/// Produced once per scan and owned by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct LiteralToken {
    pub radix: Radix,
    pub kind: NumericKind,
    /// The literal exactly as written: prefix, separators and suffix included.
    pub raw_text: String,
    /// Significant digits with prefix, separators, point, exponent and suffix
    /// removed. Octal literals keep their leading zero (`017` → `"017"`).
    /// Never empty; every byte is a digit of `radix`.
    pub digits: String,
    /// Index into `digits` where the point sits, for literals written with a
    /// point (`1.25` → `Some(1)`, `.5` → `Some(0)`).
    pub point: Option<usize>,
    /// Decimal or binary exponent as written, saturated to the `i64` range.
    pub exponent: Option<i64>,
    pub value: LiteralValue,
    /// Whether the caller consumed a unary `-` directly before the literal.
    pub negated: bool,
    pub span: Span,
}

impl LiteralToken {
    /// The value with the recorded unary minus applied.
    pub fn signed_value(&self) -> LiteralValue {
        if self.negated {
            self.value.negated()
        } else {
            self.value
        }
    }
}
