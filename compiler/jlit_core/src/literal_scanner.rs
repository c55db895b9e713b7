//! Hand-written scanner for a single numeric literal.
//!
//! The scanner starts on the first byte of a literal (`0`-`9` or `.`),
//! consumes the longest well-formed literal, and reports its shape as a
//! [`RawLiteral`]. It does not compute values; that is the cooking layer's
//! job. Grammar violations are returned as [`RawLiteralError`] values with
//! the offending byte range.
//!
//! # Grammar
//!
//! ```text
//! literal   = hex | binary | octal | decimal
//! hex       = "0" ("x"|"X") ( digits16 [long_suffix] | hex_mant bin_exp [float_suffix] )
//! hex_mant  = digits16 ["." [digits16]] | [digits16] "." digits16
//! binary    = "0" ("b"|"B") digits2 [long_suffix]
//! octal     = "0" digits8 [long_suffix]          (leading "0" is a digit)
//! decimal   = digits10 ["." [digits10]] [dec_exp] [float_suffix]
//!           | "." digits10 [dec_exp] [float_suffix]
//! digitsN   = digit { {"_"} digit }
//! ```
//!
//! A hex body with a point must carry a binary exponent. A decimal digit run
//! with a leading `0` is octal unless a point, exponent or float suffix
//! follows it.

use crate::cursor::Cursor;
use crate::tag::{NumericKind, Radix};

/// Digit-grouping byte.
///
/// Only ASCII punctuation other than `.`, `+` and `-` is accepted, so a
/// separator never collides with literal syntax or the `0x00` sentinel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Separator(u8);

impl Separator {
    /// Java's `_`.
    pub const UNDERSCORE: Separator = Separator(b'_');

    /// Validate `byte` as a separator, or `None` if it is ambiguous.
    pub const fn new(byte: u8) -> Option<Self> {
        if byte.is_ascii_punctuation() && !matches!(byte, b'.' | b'+' | b'-') {
            Some(Separator(byte))
        } else {
            None
        }
    }

    #[inline]
    pub const fn byte(self) -> u8 {
        self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator::UNDERSCORE
    }
}

/// Half-open byte range of one digit sequence, separators included.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DigitRun {
    pub start: u32,
    pub end: u32,
}

impl DigitRun {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length in bytes, separators included.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Significant digits of the run with separators removed.
    ///
    /// Separators are never alphanumeric, so filtering on
    /// `is_ascii_alphanumeric` strips exactly the separators.
    pub fn digits<'s>(&self, source: &'s [u8]) -> impl Iterator<Item = u8> + 's {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or_default()
            .iter()
            .copied()
            .filter(u8::is_ascii_alphanumeric)
    }
}

/// Exponent part of a floating literal: optional sign and digit run.
///
/// The marker byte (`e`/`E` or `p`/`P`) is implied by the radix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Exponent {
    pub negative: bool,
    pub digits: DigitRun,
}

/// Shape of one recognized literal. All offsets are absolute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawLiteral {
    pub radix: Radix,
    pub kind: NumericKind,
    /// Offset of the first byte (the caller's cursor position).
    pub start: u32,
    /// Length in bytes, including prefix and suffix.
    pub len: u32,
    /// Digits before the point, or the whole digit run of an integer.
    /// Empty for `.5` and `0x.8p1`. Excludes the radix prefix.
    pub integer: DigitRun,
    /// Digits after the point; `Some` whenever a point was consumed,
    /// possibly with an empty run (`1.`).
    pub fraction: Option<DigitRun>,
    pub exponent: Option<Exponent>,
}

impl RawLiteral {
    /// Offset one past the last byte of the literal.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.len
    }
}

/// Grammar violations detected while recognizing a literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawErrorKind {
    /// Separator before the first or after the last digit of a run.
    MalformedSeparator,
    /// Prefix, point or exponent marker without any digits (`0x`, `1e+`).
    EmptyDigitSequence,
    /// Hex literal with a point but no `p` exponent (`0x1.8`).
    MissingBinaryExponent,
    /// Decimal digit that is out of range for a binary or octal literal.
    InvalidDigitForRadix { digit: char, radix: Radix },
}

/// A grammar violation and the byte range it covers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawLiteralError {
    pub kind: RawErrorKind,
    pub pos: u32,
    pub len: u32,
}

/// Single-pass recognizer for one numeric literal.
///
/// Consumed by [`scan`](Self::scan); build a fresh scanner per literal.
pub struct LiteralScanner<'a> {
    cursor: Cursor<'a>,
    start: u32,
    separator: Separator,
}

impl<'a> LiteralScanner<'a> {
    /// Create a scanner positioned at the first byte of a literal.
    ///
    /// Any leading sign must already have been consumed by the caller.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            start: cursor.pos(),
            cursor,
            separator: Separator::UNDERSCORE,
        }
    }

    /// Use `separator` as the digit-grouping byte instead of `_`.
    #[must_use]
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Recognize the literal at the cursor.
    pub fn scan(mut self) -> Result<RawLiteral, RawLiteralError> {
        match (self.cursor.current(), self.cursor.peek()) {
            (b'0', b'x' | b'X') => self.hex(),
            (b'0', b'b' | b'B') => self.binary(),
            (b'0'..=b'9', _) => self.decimal_or_octal(),
            (b'.', _) => self.leading_point(),
            _ => {
                let len = u32::from(!self.cursor.is_eof());
                Err(raw_error(RawErrorKind::EmptyDigitSequence, self.start, len))
            }
        }
    }

    // ─── Radix Paths ───────────────────────────────────────────────

    fn hex(&mut self) -> Result<RawLiteral, RawLiteralError> {
        self.cursor.advance_n(2); // consume "0x"
        let integer = self.digit_run(|b| b.is_ascii_hexdigit())?;
        let fraction = if self.cursor.current() == b'.' {
            self.cursor.advance();
            Some(self.digit_run(|b| b.is_ascii_hexdigit())?)
        } else {
            None
        };

        let has_digits = !integer.is_empty() || fraction.is_some_and(|f| !f.is_empty());
        if !has_digits {
            return Err(self.error_from_start(RawErrorKind::EmptyDigitSequence));
        }

        if matches!(self.cursor.current(), b'p' | b'P') {
            let exponent = self.exponent()?;
            let kind = self.float_suffix();
            return Ok(self.finish(Radix::Hex, kind, integer, fraction, Some(exponent)));
        }

        if fraction.is_some() {
            return Err(self.error_from_start(RawErrorKind::MissingBinaryExponent));
        }

        // `f` and `d` are hex digits here, so only `L` can be a suffix.
        let kind = self.long_suffix();
        Ok(self.finish(Radix::Hex, kind, integer, None, None))
    }

    fn binary(&mut self) -> Result<RawLiteral, RawLiteralError> {
        self.cursor.advance_n(2); // consume "0b"
        // Eat all decimal digits; out-of-range ones are reported below.
        let digits = self.digit_run(|b| b.is_ascii_digit())?;
        if digits.is_empty() {
            return Err(self.error_from_start(RawErrorKind::EmptyDigitSequence));
        }
        self.check_digits(digits, Radix::Binary)?;
        let kind = self.long_suffix();
        Ok(self.finish(Radix::Binary, kind, digits, None, None))
    }

    fn decimal_or_octal(&mut self) -> Result<RawLiteral, RawLiteralError> {
        let leading_zero = self.cursor.current() == b'0';
        let integer = self.digit_run(|b| b.is_ascii_digit())?;

        match self.cursor.current() {
            b'.' => {
                self.cursor.advance();
                let fraction = self.digit_run(|b| b.is_ascii_digit())?;
                self.fraction_tail(integer, fraction)
            }
            b'e' | b'E' => {
                let exponent = self.exponent()?;
                let kind = self.float_suffix();
                Ok(self.finish(Radix::Decimal, kind, integer, None, Some(exponent)))
            }
            b'f' | b'F' | b'd' | b'D' => {
                let kind = self.float_suffix();
                Ok(self.finish(Radix::Decimal, kind, integer, None, None))
            }
            _ => {
                let radix = if leading_zero && integer.len() > 1 {
                    self.check_digits(integer, Radix::Octal)?;
                    Radix::Octal
                } else {
                    Radix::Decimal
                };
                let kind = self.long_suffix();
                Ok(self.finish(radix, kind, integer, None, None))
            }
        }
    }

    fn leading_point(&mut self) -> Result<RawLiteral, RawLiteralError> {
        self.cursor.advance(); // consume '.'
        let fraction = self.digit_run(|b| b.is_ascii_digit())?;
        if fraction.is_empty() {
            return Err(self.error_from_start(RawErrorKind::EmptyDigitSequence));
        }
        let integer = DigitRun {
            start: self.start,
            end: self.start,
        };
        self.fraction_tail(integer, fraction)
    }

    /// Finish a decimal floating literal once its point has been consumed.
    fn fraction_tail(
        &mut self,
        integer: DigitRun,
        fraction: DigitRun,
    ) -> Result<RawLiteral, RawLiteralError> {
        let exponent = if matches!(self.cursor.current(), b'e' | b'E') {
            Some(self.exponent()?)
        } else {
            None
        };
        let kind = self.float_suffix();
        Ok(self.finish(Radix::Decimal, kind, integer, Some(fraction), exponent))
    }

    // ─── Pieces ────────────────────────────────────────────────────

    /// Consume a run of digits and separators.
    ///
    /// Separators must sit strictly between two digits; runs of several
    /// separators are fine. An empty run is returned as-is so the caller can
    /// decide whether digits were mandatory.
    fn digit_run(&mut self, is_digit: impl Fn(u8) -> bool) -> Result<DigitRun, RawLiteralError> {
        let start = self.cursor.pos();
        let separator = self.separator.byte();

        if self.cursor.current() == separator {
            self.cursor.eat_while(|b| b == separator);
            let len = self.cursor.pos() - start;
            return Err(raw_error(RawErrorKind::MalformedSeparator, start, len));
        }

        let mut digits_end = start;
        loop {
            let b = self.cursor.current();
            if is_digit(b) {
                self.cursor.advance();
                digits_end = self.cursor.pos();
            } else if b == separator {
                self.cursor.advance();
            } else {
                break;
            }
        }

        let end = self.cursor.pos();
        if end > digits_end {
            return Err(raw_error(
                RawErrorKind::MalformedSeparator,
                digits_end,
                end - digits_end,
            ));
        }
        Ok(DigitRun { start, end })
    }

    /// Consume `e`/`p`, an optional sign, and the mandatory exponent digits.
    fn exponent(&mut self) -> Result<Exponent, RawLiteralError> {
        let marker = self.cursor.pos();
        self.cursor.advance();
        let negative = match self.cursor.current() {
            b'-' => {
                self.cursor.advance();
                true
            }
            b'+' => {
                self.cursor.advance();
                false
            }
            _ => false,
        };
        let digits = self.digit_run(|b| b.is_ascii_digit())?;
        if digits.is_empty() {
            let len = self.cursor.pos() - marker;
            return Err(raw_error(RawErrorKind::EmptyDigitSequence, marker, len));
        }
        Ok(Exponent { negative, digits })
    }

    /// Report the first digit of `run` that is out of range for `radix`.
    fn check_digits(&self, run: DigitRun, radix: Radix) -> Result<(), RawLiteralError> {
        let text = self.cursor.slice(run.start, run.end);
        let invalid = text
            .bytes()
            .zip(run.start..)
            .find(|&(b, _)| b.is_ascii_digit() && !radix.is_digit(b));
        match invalid {
            Some((digit, pos)) => Err(raw_error(
                RawErrorKind::InvalidDigitForRadix {
                    digit: char::from(digit),
                    radix,
                },
                pos,
                1,
            )),
            None => Ok(()),
        }
    }

    fn float_suffix(&mut self) -> NumericKind {
        match self.cursor.current() {
            b'f' | b'F' => {
                self.cursor.advance();
                NumericKind::Float
            }
            b'd' | b'D' => {
                self.cursor.advance();
                NumericKind::Double
            }
            _ => NumericKind::Double,
        }
    }

    fn long_suffix(&mut self) -> NumericKind {
        if matches!(self.cursor.current(), b'l' | b'L') {
            self.cursor.advance();
            NumericKind::Long
        } else {
            NumericKind::Int
        }
    }

    fn finish(
        &self,
        radix: Radix,
        kind: NumericKind,
        integer: DigitRun,
        fraction: Option<DigitRun>,
        exponent: Option<Exponent>,
    ) -> RawLiteral {
        RawLiteral {
            radix,
            kind,
            start: self.start,
            len: self.cursor.pos() - self.start,
            integer,
            fraction,
            exponent,
        }
    }

    /// Error spanning from the literal start to the current position.
    fn error_from_start(&self, kind: RawErrorKind) -> RawLiteralError {
        raw_error(kind, self.start, self.cursor.pos() - self.start)
    }
}

fn raw_error(kind: RawErrorKind, pos: u32, len: u32) -> RawLiteralError {
    RawLiteralError { kind, pos, len }
}

#[cfg(test)]
mod tests;
