//! Scanner configuration.

use std::fmt;

use jlit_core::Separator;

/// Options controlling how literals are recognized.
///
/// The default matches Java: `_` separates digit groups.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanOptions {
    separator: Separator,
}

impl ScanOptions {
    /// Digit-grouping byte.
    #[inline]
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Use a different digit-grouping byte, such as `'` for C++-style
    /// `1'000'000`.
    ///
    /// The separator must be ASCII punctuation and must not be `.`, `+` or
    /// `-`, which already have a meaning inside literals.
    pub fn with_separator(self, separator: u8) -> Result<Self, InvalidSeparator> {
        Separator::new(separator)
            .map(|separator| ScanOptions { separator })
            .ok_or(InvalidSeparator(separator))
    }
}

/// Rejected separator byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidSeparator(pub u8);

impl fmt::Display for InvalidSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} cannot be used as a digit separator; \
             use ASCII punctuation other than '.', '+' or '-'",
            char::from(self.0)
        )
    }
}

impl std::error::Error for InvalidSeparator {}
