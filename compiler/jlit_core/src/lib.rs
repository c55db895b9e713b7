//! Low-level recognizer for Java-style numeric literals.
//!
//! This crate finds the *shape* of a numeric literal: where it ends, which
//! radix and kind it has, and where its integer, fraction and exponent digit
//! runs sit in the source. It never computes a value; decoding lives in the
//! `jlit` crate, which consumes [`RawLiteral`] and produces typed tokens.
//!
//! # Usage
//!
//! ```
//! use jlit_core::{LiteralScanner, NumericKind, Radix, SourceBuffer};
//!
//! let buf = SourceBuffer::new("int x = 0x12_345_678;");
//! let raw = LiteralScanner::new(buf.cursor_at(8)).scan().unwrap();
//! assert_eq!(raw.radix, Radix::Hex);
//! assert_eq!(raw.kind, NumericKind::Int);
//! assert_eq!(raw.end(), 20);
//! ```

mod cursor;
mod literal_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use literal_scanner::{
    DigitRun, Exponent, LiteralScanner, RawErrorKind, RawLiteral, RawLiteralError, Separator,
};
pub use source_buffer::SourceBuffer;
pub use tag::{NumericKind, Radix};
