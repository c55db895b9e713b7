#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Helper: scan the literal at the start of `source`.
fn scan(source: &str) -> Result<RawLiteral, RawLiteralError> {
    let buf = SourceBuffer::new(source);
    LiteralScanner::new(buf.cursor_at(0)).scan()
}

/// Helper: scan and return the consumed text.
fn scanned_text(source: &str) -> String {
    let raw = scan(source).unwrap_or_else(|e| panic!("{source:?} failed: {e:?}"));
    source[raw.start as usize..raw.end() as usize].to_string()
}

/// Helper: scan and return (radix, kind).
fn shape(source: &str) -> (Radix, NumericKind) {
    let raw = scan(source).unwrap_or_else(|e| panic!("{source:?} failed: {e:?}"));
    (raw.radix, raw.kind)
}

/// Helper: scan expecting an error and return it.
fn error(source: &str) -> RawLiteralError {
    match scan(source) {
        Ok(raw) => panic!("{source:?} unexpectedly scanned as {raw:?}"),
        Err(e) => e,
    }
}

fn digits(source: &str, run: DigitRun) -> String {
    String::from_utf8(run.digits(source.as_bytes()).collect()).unwrap()
}

// === Radix Detection ===

#[test]
fn zero_forms_resolve_through_different_radixes() {
    assert_eq!(shape("0"), (Radix::Decimal, NumericKind::Int));
    assert_eq!(shape("00"), (Radix::Octal, NumericKind::Int));
    assert_eq!(shape("0x0"), (Radix::Hex, NumericKind::Int));
    assert_eq!(shape("0b0"), (Radix::Binary, NumericKind::Int));
}

#[test]
fn prefixes_are_case_insensitive() {
    assert_eq!(shape("0X1A"), (Radix::Hex, NumericKind::Int));
    assert_eq!(shape("0B10"), (Radix::Binary, NumericKind::Int));
}

#[test]
fn leading_zero_before_point_or_exponent_is_decimal() {
    assert_eq!(shape("0.5"), (Radix::Decimal, NumericKind::Double));
    assert_eq!(shape("09.5"), (Radix::Decimal, NumericKind::Double));
    assert_eq!(shape("017e1"), (Radix::Decimal, NumericKind::Double));
    assert_eq!(shape("017f"), (Radix::Decimal, NumericKind::Float));
    assert_eq!(shape("09d"), (Radix::Decimal, NumericKind::Double));
    assert_eq!(shape("0f"), (Radix::Decimal, NumericKind::Float));
}

#[test]
fn octal_keeps_separators_after_leading_zero() {
    let source = "0__1__2__3__4__5__6__7";
    let raw = scan(source).unwrap();
    assert_eq!(raw.radix, Radix::Octal);
    assert_eq!(raw.len as usize, source.len());
    assert_eq!(digits(source, raw.integer), "01234567");
}

#[test]
fn octal_rejects_eight_and_nine() {
    let e = error("0128");
    assert_eq!(
        e.kind,
        RawErrorKind::InvalidDigitForRadix {
            digit: '8',
            radix: Radix::Octal
        }
    );
    assert_eq!((e.pos, e.len), (3, 1));
    assert!(matches!(
        error("09").kind,
        RawErrorKind::InvalidDigitForRadix { digit: '9', .. }
    ));
}

#[test]
fn binary_rejects_decimal_digits() {
    let e = error("0b102");
    assert_eq!(
        e.kind,
        RawErrorKind::InvalidDigitForRadix {
            digit: '2',
            radix: Radix::Binary
        }
    );
    assert_eq!(e.pos, 4);
}

// === Digit Runs & Separators ===

#[test]
fn hex_digit_run_excludes_prefix() {
    let source = "0x12_345_678";
    let raw = scan(source).unwrap();
    assert_eq!(raw.integer, DigitRun { start: 2, end: 12 });
    assert_eq!(digits(source, raw.integer), "12345678");
}

#[test]
fn separator_runs_between_digits_are_accepted() {
    assert_eq!(scanned_text("1__000"), "1__000");
    assert_eq!(scanned_text("0b01_01_01_01_01"), "0b01_01_01_01_01");
    assert_eq!(scanned_text("1e3__0__8"), "1e3__0__8");
}

#[test]
fn separator_after_prefix_is_malformed() {
    let e = error("0x_1");
    assert_eq!(e.kind, RawErrorKind::MalformedSeparator);
    assert_eq!((e.pos, e.len), (2, 1));
    assert_eq!(error("0b__1").kind, RawErrorKind::MalformedSeparator);
}

#[test]
fn trailing_separator_is_malformed() {
    let e = error("100__;");
    assert_eq!(e.kind, RawErrorKind::MalformedSeparator);
    assert_eq!((e.pos, e.len), (3, 2));
    assert_eq!(error("1_L").kind, RawErrorKind::MalformedSeparator);
    assert_eq!(error("0x1_p0").kind, RawErrorKind::MalformedSeparator);
}

#[test]
fn separator_next_to_point_or_exponent_is_malformed() {
    assert_eq!(error("1_.5").kind, RawErrorKind::MalformedSeparator);
    assert_eq!(error("1._5").kind, RawErrorKind::MalformedSeparator);
    assert_eq!(error("._5").kind, RawErrorKind::MalformedSeparator);
    assert_eq!(error("1_e5").kind, RawErrorKind::MalformedSeparator);
    assert_eq!(error("1e_5").kind, RawErrorKind::MalformedSeparator);
    assert_eq!(error("1e+_5").kind, RawErrorKind::MalformedSeparator);
    assert_eq!(error("0x1._8p0").kind, RawErrorKind::MalformedSeparator);
}

#[test]
fn custom_separator() {
    let buf = SourceBuffer::new("1'000'000");
    let raw = LiteralScanner::new(buf.cursor_at(0))
        .with_separator(Separator::new(b'\'').unwrap())
        .scan()
        .unwrap();
    assert_eq!(raw.len, 9);
    // With the default separator the quote ends the literal.
    let raw = LiteralScanner::new(buf.cursor_at(0)).scan().unwrap();
    assert_eq!(raw.len, 1);
}

#[test]
fn separator_rejects_sentinel_and_literal_syntax() {
    for byte in [0, b'.', b'+', b'-', b'a', b'7', b' ', 0x80] {
        assert_eq!(Separator::new(byte), None, "{byte:#04x}");
    }
    assert_eq!(Separator::new(b'_'), Some(Separator::UNDERSCORE));
    assert_eq!(Separator::default().byte(), b'_');
}

#[test]
fn custom_separator_stops_at_end_of_input() {
    let buf = SourceBuffer::new("1''");
    let err = LiteralScanner::new(buf.cursor_at(0))
        .with_separator(Separator::new(b'\'').unwrap())
        .scan()
        .unwrap_err();
    assert_eq!(err.kind, RawErrorKind::MalformedSeparator);
}

// === Floating Literals ===

#[test]
fn decimal_float_forms() {
    assert_eq!(shape("3.14"), (Radix::Decimal, NumericKind::Double));
    assert_eq!(shape(".0"), (Radix::Decimal, NumericKind::Double));
    assert_eq!(shape("0."), (Radix::Decimal, NumericKind::Double));
    assert_eq!(shape("1e10"), (Radix::Decimal, NumericKind::Double));
    assert_eq!(shape("1.E-5"), (Radix::Decimal, NumericKind::Double));
    assert_eq!(shape("3.4028235e38f"), (Radix::Decimal, NumericKind::Float));
    assert_eq!(shape("2D"), (Radix::Decimal, NumericKind::Double));
}

#[test]
fn point_without_fraction_digits() {
    let raw = scan("1.").unwrap();
    assert_eq!(raw.fraction, Some(DigitRun { start: 2, end: 2 }));
    assert_eq!(raw.len, 2);
}

#[test]
fn leading_point_has_empty_integer_run() {
    let source = ".0__1__2";
    let raw = scan(source).unwrap();
    assert!(raw.integer.is_empty());
    assert_eq!(digits(source, raw.fraction.unwrap()), "012");
}

#[test]
fn exponent_sign_and_digits() {
    let source = "4.9e-3__2__4";
    let raw = scan(source).unwrap();
    let exponent = raw.exponent.unwrap();
    assert!(exponent.negative);
    assert_eq!(digits(source, exponent.digits), "324");
}

#[test]
fn empty_exponent_is_an_error() {
    let e = error("1e;");
    assert_eq!(e.kind, RawErrorKind::EmptyDigitSequence);
    assert_eq!((e.pos, e.len), (1, 1));
    let e = error("1.5E+");
    assert_eq!(e.kind, RawErrorKind::EmptyDigitSequence);
    assert_eq!((e.pos, e.len), (3, 2));
}

#[test]
fn hex_float_forms() {
    assert_eq!(shape("0x1.0p0"), (Radix::Hex, NumericKind::Double));
    assert_eq!(shape("0x1.fffffeP+127f"), (Radix::Hex, NumericKind::Float));
    assert_eq!(shape("0x1.p3"), (Radix::Hex, NumericKind::Double));
    assert_eq!(shape("0xap1__0__0"), (Radix::Hex, NumericKind::Double));
    assert_eq!(shape("0x1P-1074d"), (Radix::Hex, NumericKind::Double));
}

#[test]
fn hex_float_with_empty_integer_part() {
    let source = "0x.0p0";
    let raw = scan(source).unwrap();
    assert_eq!(raw.radix, Radix::Hex);
    assert_eq!(raw.kind, NumericKind::Double);
    assert!(raw.integer.is_empty());
    assert_eq!(digits(source, raw.fraction.unwrap()), "0");
    assert_eq!(raw.len as usize, source.len());
}

#[test]
fn hex_point_without_exponent_is_missing_binary_exponent() {
    let e = error("0x1.8;");
    assert_eq!(e.kind, RawErrorKind::MissingBinaryExponent);
    assert_eq!((e.pos, e.len), (0, 5));
    assert_eq!(error("0x.8").kind, RawErrorKind::MissingBinaryExponent);
    assert_eq!(error("0x1.").kind, RawErrorKind::MissingBinaryExponent);
}

#[test]
fn hex_without_any_digits() {
    assert_eq!(error("0x").kind, RawErrorKind::EmptyDigitSequence);
    assert_eq!(error("0x.p0").kind, RawErrorKind::EmptyDigitSequence);
    assert_eq!(error("0xg").kind, RawErrorKind::EmptyDigitSequence);
    assert_eq!(error("0b").kind, RawErrorKind::EmptyDigitSequence);
}

#[test]
fn leading_point_without_digits() {
    let e = error(".;");
    assert_eq!(e.kind, RawErrorKind::EmptyDigitSequence);
    assert_eq!((e.pos, e.len), (0, 1));
}

#[test]
fn non_literal_start_is_rejected() {
    let e = error("x");
    assert_eq!(e.kind, RawErrorKind::EmptyDigitSequence);
    assert_eq!(e.len, 1);
    assert_eq!(error("").len, 0);
}

// === Suffixes ===

#[test]
fn long_suffix_on_every_integral_radix() {
    assert_eq!(shape("1L"), (Radix::Decimal, NumericKind::Long));
    assert_eq!(shape("0x7fff_ffff_ffff_ffffL"), (Radix::Hex, NumericKind::Long));
    assert_eq!(shape("07_7777L"), (Radix::Octal, NumericKind::Long));
    assert_eq!(shape("0b1l"), (Radix::Binary, NumericKind::Long));
}

#[test]
fn hex_f_and_d_are_digits() {
    let raw = scan("0x1f").unwrap();
    assert_eq!(raw.kind, NumericKind::Int);
    assert_eq!(raw.len, 4);
    assert_eq!(scan("0x1d").unwrap().len, 4);
}

#[test]
fn long_suffix_not_consumed_after_float() {
    assert_eq!(scanned_text("1.0L"), "1.0");
    assert_eq!(scanned_text("1e5L"), "1e5");
}

#[test]
fn float_suffix_not_consumed_after_binary() {
    assert_eq!(scanned_text("0b1f"), "0b1");
}

// === Boundaries ===

#[test]
fn literal_ends_at_first_non_literal_byte() {
    assert_eq!(scanned_text("42;"), "42");
    assert_eq!(scanned_text("0x1F)"), "0x1F");
    assert_eq!(scanned_text("1.5f,"), "1.5f");
    assert_eq!(scanned_text("7 + 1"), "7");
}

#[test]
fn scanning_from_an_offset() {
    let source = "long v = 0x8000_0000_0000_0000L;";
    let buf = SourceBuffer::new(source);
    let raw = LiteralScanner::new(buf.cursor_at(9)).scan().unwrap();
    assert_eq!(raw.start, 9);
    assert_eq!(&source[raw.start as usize..raw.end() as usize], "0x8000_0000_0000_0000L");
}

// === Properties ===

mod proptest_separators {
    use super::*;
    use proptest::prelude::*;

    /// Join digits with separator runs of 0..=3 underscores.
    fn with_separators(digits: &str, runs: &[usize]) -> String {
        let mut out = String::new();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 {
                out.push_str(&"_".repeat(runs[i % runs.len()]));
            }
            out.push(c);
        }
        out
    }

    proptest! {
        #[test]
        fn separated_decimal_scans_whole_text(
            digits in "[1-9][0-9]{0,20}",
            runs in proptest::collection::vec(0usize..=3, 1..8),
        ) {
            let text = with_separators(&digits, &runs);
            let raw = scan(&text).unwrap();
            prop_assert_eq!(raw.len as usize, text.len());
            prop_assert_eq!(super::digits(&text, raw.integer), digits);
        }

        #[test]
        fn separated_hex_scans_whole_text(
            digits in "[0-9a-fA-F]{1,20}",
            runs in proptest::collection::vec(0usize..=3, 1..8),
        ) {
            let text = format!("0x{}L", with_separators(&digits, &runs));
            let raw = scan(&text).unwrap();
            prop_assert_eq!(raw.len as usize, text.len());
            prop_assert_eq!(raw.kind, NumericKind::Long);
            prop_assert_eq!(super::digits(&text, raw.integer), digits);
        }

        #[test]
        fn scanner_never_panics(text in "[0-9a-fA-FxXbBpPeElL_.+-]{0,24}") {
            let buf = SourceBuffer::new(&text);
            if let Ok(raw) = LiteralScanner::new(buf.cursor_at(0)).scan() {
                prop_assert!(raw.end() as usize <= text.len());
                prop_assert!(raw.len > 0);
            }
        }
    }
}
