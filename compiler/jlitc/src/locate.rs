//! Literal-start segmentation for Java source files.
//!
//! A lightweight pass that finds where numeric literals begin without
//! tokenizing the whole language. Comments, string literals, text blocks and
//! char literals are skipped; identifiers are consumed whole so `x1` or
//! `$2` never look like literals; a `-` in prefix position is recorded as
//! unary minus on the literal that follows it.
//!
//! Finding the *end* of a literal is the scanner's job. This pass only skips
//! over the number-like bytes so it does not restart inside one.

/// Where a literal begins and whether a unary minus precedes it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LiteralStart {
    pub offset: u32,
    pub negated: bool,
}

/// Role of the previous significant token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Prev {
    /// Start of input, an operator, or opening punctuation.
    Operator,
    /// Identifier, literal, or closing bracket.
    Operand,
    /// A prefix `-` still waiting for its operand.
    UnaryMinus,
}

/// Keywords that are followed by an expression, so a `-` after them is
/// unary.
const EXPRESSION_KEYWORDS: &[&[u8]] = &[b"assert", b"case", b"return", b"throw", b"yield"];

/// Find every numeric literal start in `source`, in order.
pub fn literal_starts(source: &[u8]) -> Vec<LiteralStart> {
    let mut starts = Vec::new();
    let mut prev = Prev::Operator;
    let mut pos = 0usize;

    while let Some(&b) = source.get(pos) {
        let next = source.get(pos + 1).copied().unwrap_or(0);
        match b {
            b' ' | b'\t' | b'\r' | b'\n' | 0x0c => pos += 1,
            b'/' if next == b'/' => pos = skip_line_comment(source, pos),
            b'/' if next == b'*' => pos = skip_block_comment(source, pos),
            b'"' => {
                pos = skip_string(source, pos);
                prev = Prev::Operand;
            }
            b'\'' => {
                pos = skip_quoted(source, pos, b'\'');
                prev = Prev::Operand;
            }
            b'0'..=b'9' => {
                pos = push_literal(&mut starts, source, pos, prev);
                prev = Prev::Operand;
            }
            b'.' if next.is_ascii_digit() => {
                pos = push_literal(&mut starts, source, pos, prev);
                prev = Prev::Operand;
            }
            b'-' | b'+' if next == b => {
                // `++` / `--` leave the operand/operator state as it was.
                pos += 2;
            }
            b'-' => {
                prev = if prev == Prev::Operand {
                    Prev::Operator
                } else {
                    Prev::UnaryMinus
                };
                pos += 1;
            }
            b')' | b']' => {
                prev = Prev::Operand;
                pos += 1;
            }
            _ if is_ident_start(b) => {
                let end = skip_ident(source, pos);
                let word = source.get(pos..end).unwrap_or_default();
                prev = if EXPRESSION_KEYWORDS.contains(&word) {
                    Prev::Operator
                } else {
                    Prev::Operand
                };
                pos = end;
            }
            _ => {
                prev = Prev::Operator;
                pos += 1;
            }
        }
    }

    starts
}

fn push_literal(starts: &mut Vec<LiteralStart>, source: &[u8], pos: usize, prev: Prev) -> usize {
    if let Ok(offset) = u32::try_from(pos) {
        starts.push(LiteralStart {
            offset,
            negated: prev == Prev::UnaryMinus,
        });
    }
    skip_number(source, pos)
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$' || b >= 0x80
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

fn skip_ident(source: &[u8], start: usize) -> usize {
    let len = source
        .get(start..)
        .unwrap_or_default()
        .iter()
        .take_while(|&&b| is_ident_continue(b))
        .count();
    start + len
}

/// Skip the number-like bytes of a literal: alphanumerics, separators,
/// points, and a sign directly after an exponent marker.
fn skip_number(source: &[u8], start: usize) -> usize {
    let hex =
        source.get(start) == Some(&b'0') && matches!(source.get(start + 1), Some(b'x' | b'X'));
    let mut pos = start;
    let mut last = 0u8;
    while let Some(&b) = source.get(pos) {
        let signed_exponent = matches!(b, b'+' | b'-')
            && (matches!(last, b'p' | b'P') || (!hex && matches!(last, b'e' | b'E')));
        if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || signed_exponent {
            last = b;
            pos += 1;
        } else {
            break;
        }
    }
    pos
}

fn skip_line_comment(source: &[u8], start: usize) -> usize {
    source
        .get(start..)
        .unwrap_or_default()
        .iter()
        .position(|&b| b == b'\n')
        .map_or(source.len(), |i| start + i)
}

fn skip_block_comment(source: &[u8], start: usize) -> usize {
    source
        .get(start + 2..)
        .unwrap_or_default()
        .windows(2)
        .position(|w| w == b"*/")
        .map_or(source.len(), |i| start + 2 + i + 2)
}

/// Skip a string literal or a `"""` text block.
fn skip_string(source: &[u8], start: usize) -> usize {
    const TEXT_BLOCK: &[u8] = b"\"\"\"";
    let rest = |pos: usize| source.get(pos..).unwrap_or_default();
    if rest(start).starts_with(TEXT_BLOCK) {
        let mut pos = start + TEXT_BLOCK.len();
        while pos < source.len() {
            if rest(pos).starts_with(TEXT_BLOCK) {
                return pos + TEXT_BLOCK.len();
            }
            pos += if source.get(pos) == Some(&b'\\') { 2 } else { 1 };
        }
        return source.len();
    }
    skip_quoted(source, start, b'"')
}

/// Skip a single-line literal delimited by `quote`, honoring backslash
/// escapes. An unterminated literal ends at the newline.
fn skip_quoted(source: &[u8], start: usize, quote: u8) -> usize {
    let mut pos = start + 1;
    while let Some(&b) = source.get(pos) {
        match b {
            b'\\' => pos += 2,
            b'\n' => return pos,
            _ if b == quote => return pos + 1,
            _ => pos += 1,
        }
    }
    source.len()
}
