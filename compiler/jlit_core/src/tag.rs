//! Closed classifications of a numeric literal: radix and numeric kind.

use std::fmt;

/// Base of a numeric literal.
///
/// Discriminants are the radix values themselves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Radix {
    /// `0b` / `0B` prefix.
    Binary = 2,
    /// Leading `0` followed by further digits.
    Octal = 8,
    /// No prefix.
    Decimal = 10,
    /// `0x` / `0X` prefix.
    Hex = 16,
}

impl Radix {
    /// Returns `true` if `b` is a digit in this radix.
    #[inline]
    pub const fn is_digit(self, b: u8) -> bool {
        match self {
            Radix::Binary => matches!(b, b'0' | b'1'),
            Radix::Octal => matches!(b, b'0'..=b'7'),
            Radix::Decimal => b.is_ascii_digit(),
            Radix::Hex => b.is_ascii_hexdigit(),
        }
    }

    /// Bits contributed by one digit, for the power-of-two radixes.
    ///
    /// `None` for decimal, whose digits do not map onto whole bits.
    #[inline]
    pub const fn bits_per_digit(self) -> Option<u32> {
        match self {
            Radix::Binary => Some(1),
            Radix::Octal => Some(3),
            Radix::Hex => Some(4),
            Radix::Decimal => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hex => "hex",
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Java type a numeric literal denotes.
///
/// Chosen from the suffix and from the presence of a point or exponent;
/// there is no later reclassification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// 32-bit two's-complement integer (no suffix).
    Int,
    /// 64-bit two's-complement integer (`l` / `L`).
    Long,
    /// IEEE-754 binary32 (`f` / `F`).
    Float,
    /// IEEE-754 binary64 (`d` / `D`, or no suffix on a floating literal).
    Double,
}

impl NumericKind {
    #[inline]
    pub const fn is_integral(self) -> bool {
        matches!(self, NumericKind::Int | NumericKind::Long)
    }

    #[inline]
    pub const fn is_floating(self) -> bool {
        !self.is_integral()
    }

    /// Java keyword naming the type.
    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::Int => "int",
            NumericKind::Long => "long",
            NumericKind::Float => "float",
            NumericKind::Double => "double",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
