//! Literal scan errors.
//!
//! Errors follow the WHERE+WHAT+HOW shape:
//! - WHERE: `span` covering the offending bytes
//! - WHAT: `kind` describing what went wrong
//! - HOW: `suggestions` providing actionable fixes
//!
//! Every error is local to one literal. The scanner never recovers; callers
//! decide whether to skip the token, record it and continue, or stop.

use std::fmt;

use jlit_core::{NumericKind, Radix, RawErrorKind, RawLiteralError};

use crate::Span;

/// A literal that could not be recognized or decoded.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScanError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: ScanErrorKind,
    /// HOW to fix (actionable suggestions, most relevant first).
    pub suggestions: Vec<ScanSuggestion>,
}

/// What kind of scan error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScanErrorKind {
    /// Separator before the first or after the last digit of a digit run,
    /// or next to a prefix, point or exponent marker (`0x_1`, `1_`, `1_.5`).
    MalformedSeparator,
    /// A prefix, point or exponent marker with no digits (`0x`, `1e`, `.`).
    EmptyDigitSequence,
    /// Hex literal with a fractional part but no `p` exponent (`0x1.8`).
    MissingBinaryExponent,
    /// Decimal integer out of range for its kind, or a nonzero floating
    /// literal that rounds to infinity.
    MagnitudeOverflow { kind: NumericKind },
    /// Nonzero floating literal that rounds to zero (`1e-50f`).
    MagnitudeUnderflow { kind: NumericKind },
    /// Digit out of range for the literal's radix (`0b2`, `08`).
    InvalidDigitForRadix { digit: char, radix: Radix },
}

impl ScanErrorKind {
    /// Short description without location.
    pub fn message(&self) -> String {
        match self {
            ScanErrorKind::MalformedSeparator => {
                "digit separator must appear between two digits".to_string()
            }
            ScanErrorKind::EmptyDigitSequence => "numeric literal has no digits".to_string(),
            ScanErrorKind::MissingBinaryExponent => {
                "hexadecimal floating-point literal requires a binary exponent".to_string()
            }
            ScanErrorKind::MagnitudeOverflow { kind } => {
                format!("{kind} literal is too large")
            }
            ScanErrorKind::MagnitudeUnderflow { kind } => {
                format!("{kind} literal is too small and rounds to zero")
            }
            ScanErrorKind::InvalidDigitForRadix { digit, radix } => {
                format!("invalid digit '{digit}' in {radix} literal")
            }
        }
    }
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Suggestion for fixing a malformed literal.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScanSuggestion {
    /// Human-readable message describing the fix.
    pub message: String,
    /// Concrete text replacement for auto-fix, if applicable.
    pub replacement: Option<ScanReplacement>,
}

/// A concrete text replacement for an auto-fix.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScanReplacement {
    pub span: Span,
    pub text: String,
}

impl ScanSuggestion {
    /// Create a text-only suggestion (no code replacement).
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
        }
    }

    /// Create a suggestion that deletes `span`.
    pub fn removal(message: impl Into<String>, span: Span) -> Self {
        Self::replace(message, span, "")
    }

    /// Create a suggestion that replaces `span` with `text`.
    pub fn replace(message: impl Into<String>, span: Span, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: Some(ScanReplacement {
                span,
                text: text.into(),
            }),
        }
    }
}

impl ScanError {
    #[cold]
    pub fn malformed_separator(span: Span) -> Self {
        Self {
            span,
            kind: ScanErrorKind::MalformedSeparator,
            suggestions: vec![ScanSuggestion::removal("remove the separator", span)],
        }
    }

    #[cold]
    pub fn empty_digit_sequence(span: Span) -> Self {
        Self {
            span,
            kind: ScanErrorKind::EmptyDigitSequence,
            suggestions: vec![ScanSuggestion::text("add at least one digit")],
        }
    }

    /// `span` covers the literal up to where the exponent was expected.
    #[cold]
    pub fn missing_binary_exponent(span: Span) -> Self {
        Self {
            span,
            kind: ScanErrorKind::MissingBinaryExponent,
            suggestions: vec![ScanSuggestion::replace(
                "add a binary exponent",
                Span::point(span.end),
                "p0",
            )],
        }
    }

    #[cold]
    pub fn magnitude_overflow(span: Span, kind: NumericKind) -> Self {
        let suggestions = match kind {
            NumericKind::Int => vec![ScanSuggestion::replace(
                "use a long literal",
                Span::point(span.end),
                "L",
            )],
            NumericKind::Float => vec![ScanSuggestion::text(
                "use a double literal for values above 3.4028235e38",
            )],
            NumericKind::Long | NumericKind::Double => Vec::new(),
        };
        Self {
            span,
            kind: ScanErrorKind::MagnitudeOverflow { kind },
            suggestions,
        }
    }

    #[cold]
    pub fn magnitude_underflow(span: Span, kind: NumericKind) -> Self {
        let suggestions = match kind {
            NumericKind::Float => vec![ScanSuggestion::text(
                "use a double literal for values below 1.4e-45",
            )],
            _ => Vec::new(),
        };
        Self {
            span,
            kind: ScanErrorKind::MagnitudeUnderflow { kind },
            suggestions,
        }
    }

    #[cold]
    pub fn invalid_digit_for_radix(span: Span, digit: char, radix: Radix) -> Self {
        let valid = match radix {
            Radix::Binary => "binary literals use only the digits 0 and 1",
            Radix::Octal => "octal literals use only the digits 0 to 7",
            Radix::Decimal => "decimal literals use only the digits 0 to 9",
            Radix::Hex => "hex literals use only 0 to 9 and a to f",
        };
        Self {
            span,
            kind: ScanErrorKind::InvalidDigitForRadix { digit, radix },
            suggestions: vec![ScanSuggestion::text(valid)],
        }
    }
}

impl From<RawLiteralError> for ScanError {
    fn from(err: RawLiteralError) -> Self {
        let span = Span::at(err.pos, err.len);
        match err.kind {
            RawErrorKind::MalformedSeparator => ScanError::malformed_separator(span),
            RawErrorKind::EmptyDigitSequence => ScanError::empty_digit_sequence(span),
            RawErrorKind::MissingBinaryExponent => ScanError::missing_binary_exponent(span),
            RawErrorKind::InvalidDigitForRadix { digit, radix } => {
                ScanError::invalid_digit_for_radix(span, digit, radix)
            }
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

impl std::error::Error for ScanError {}
