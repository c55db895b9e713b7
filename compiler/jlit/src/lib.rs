//! Recognizer and decoder for Java-style numeric literals.
//!
//! Given a position known to start a numeric literal, [`scan`] consumes the
//! longest well-formed literal, classifies its radix and kind, strips digit
//! separators, and decodes it to an exact value. Malformed or out-of-range
//! literals produce a [`ScanError`] with a span and fix suggestions.
//!
//! The raw recognition layer lives in `jlit_core`; this crate adds decoding,
//! errors, formatting and configuration.
//!
//! # Usage
//!
//! ```
//! use jlit::{scan, LiteralValue, NumericKind, SourceBuffer, SourceCursor};
//!
//! let buf = SourceBuffer::new("long mask = 0xffff_ffffL;");
//! let token = scan(SourceCursor::new(&buf, 12)).unwrap();
//! assert_eq!(token.kind, NumericKind::Long);
//! assert_eq!(token.value, LiteralValue::Long(0xffff_ffff));
//! assert_eq!(token.raw_text, "0xffff_ffffL");
//! ```
//!
//! # Unary minus
//!
//! Java has no negative literals: `-2147483648` is unary minus applied to
//! `2147483648`. Decoding never sees the sign, so that literal overflows
//! `int` here like anywhere else. Callers that consumed a `-` directly
//! before the literal record it with [`SourceCursor::after_minus`]; the
//! token keeps the flag and [`LiteralToken::signed_value`] applies it.
//! Accepting the most negative decimal is left to the caller, which knows
//! the expression context.

mod decode;
mod format;
mod hex_float;
mod options;
mod scan_error;
mod span;
mod token;

use tracing::{debug, trace};

pub use jlit_core::{NumericKind, Radix, Separator, SourceBuffer};
pub use options::{InvalidSeparator, ScanOptions};
pub use scan_error::{ScanError, ScanErrorKind, ScanReplacement, ScanSuggestion};
pub use span::Span;
pub use token::{LiteralToken, LiteralValue};

use jlit_core::LiteralScanner;

/// Position in a source buffer where a literal starts.
///
/// Cheap to copy; the buffer is borrowed, never modified.
#[derive(Copy, Clone, Debug)]
pub struct SourceCursor<'a> {
    buffer: &'a SourceBuffer,
    offset: u32,
    negated: bool,
}

impl<'a> SourceCursor<'a> {
    /// Cursor at `offset` with no preceding unary minus.
    ///
    /// Offsets past the end of the source are clamped to the end.
    pub fn new(buffer: &'a SourceBuffer, offset: u32) -> Self {
        SourceCursor {
            buffer,
            offset: offset.min(buffer.len()),
            negated: false,
        }
    }

    /// Cursor at `offset` where the caller already consumed a unary `-`.
    pub fn after_minus(buffer: &'a SourceBuffer, offset: u32) -> Self {
        SourceCursor {
            negated: true,
            ..SourceCursor::new(buffer, offset)
        }
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[inline]
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// Scan and decode the literal at `cursor` with default options.
///
/// The cursor must sit on `0`-`9` or `.`; anything else is an
/// [`EmptyDigitSequence`](ScanErrorKind::EmptyDigitSequence) error.
pub fn scan(cursor: SourceCursor<'_>) -> Result<LiteralToken, ScanError> {
    scan_with(cursor, &ScanOptions::default())
}

/// Scan and decode the literal at `cursor`.
pub fn scan_with(
    cursor: SourceCursor<'_>,
    options: &ScanOptions,
) -> Result<LiteralToken, ScanError> {
    let offset = cursor.offset();
    let result = LiteralScanner::new(cursor.buffer.cursor_at(offset))
        .with_separator(options.separator())
        .scan()
        .map_err(ScanError::from)
        .and_then(|raw| decode::cook(&raw, cursor.buffer, cursor.is_negated()));

    match &result {
        Ok(token) => trace!(
            offset,
            len = token.span.len(),
            radix = %token.radix,
            kind = %token.kind,
            value = %token.value,
            "scanned literal"
        ),
        Err(err) => debug!(offset, error = %err, "literal rejected"),
    }
    result
}
