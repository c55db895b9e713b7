//! Canonical text for decoded values.
//!
//! Both renderings produce Java source text that decodes back to the same
//! bits: `Display` for reading, [`LiteralValue::to_hex_string`] for exact
//! inspection of floating-point encodings.

use std::fmt;

use crate::hex_float::{self, FloatFormat};
use crate::LiteralValue;

impl fmt::Display for LiteralValue {
    /// Non-negative integers print in decimal, negative ones as their hex
    /// bit pattern (a negative decimal is not a single literal). Floats use
    /// the shortest scientific form that rounds back to the same value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LiteralValue::Int(v) if v < 0 => write!(f, "{v:#x}"),
            LiteralValue::Int(v) => write!(f, "{v}"),
            LiteralValue::Long(v) if v < 0 => write!(f, "{v:#x}L"),
            LiteralValue::Long(v) => write!(f, "{v}L"),
            LiteralValue::Float(v) => write!(f, "{v:e}f"),
            LiteralValue::Double(v) => write!(f, "{v:e}"),
        }
    }
}

impl LiteralValue {
    /// Hexadecimal rendering of the value's encoding.
    ///
    /// Integers print their two's-complement bit pattern (`0xffffffff`,
    /// `0x8000000000000000L`). Floats follow `Float.toHexString` and
    /// `Double.toHexString`: `0x1.0p0`, `0x1.fffffep127`,
    /// `0x0.000002p-126`, `0x0.0p0`.
    pub fn to_hex_string(&self) -> String {
        match *self {
            LiteralValue::Int(v) => format!("{v:#x}"),
            LiteralValue::Long(v) => format!("{v:#x}L"),
            LiteralValue::Float(v) => {
                hex_float::to_hex_string(u64::from(v.to_bits()), FloatFormat::BINARY32)
            }
            LiteralValue::Double(v) => hex_float::to_hex_string(v.to_bits(), FloatFormat::BINARY64),
        }
    }
}
