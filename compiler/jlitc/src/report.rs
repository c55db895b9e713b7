//! Batch decoding of every literal in a file, and the text report.

use jlit::{
    scan, LiteralToken, LiteralValue, NumericKind, Radix, ScanError, ScanErrorKind, SourceBuffer,
    SourceCursor,
};
use rayon::prelude::*;
use tracing::debug;

use crate::locate::{literal_starts, LiteralStart};

/// How the report is produced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Print values with `to_hex_string` instead of `Display`.
    pub hex: bool,
    /// Decode on the current thread instead of a rayon pool.
    pub sequential: bool,
}

/// Rendered report lines plus the number of literals that failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
    pub literals: usize,
    pub failures: usize,
}

/// Locate, decode and render every numeric literal in `source`.
pub fn report(source: &str, options: ReportOptions) -> Report {
    let buffer = SourceBuffer::new(source);
    let starts = literal_starts(buffer.as_bytes());
    debug!(literals = starts.len(), "located literal starts");

    let results = decode_all(&buffer, &starts, options.sequential);
    let index = LineIndex::new(source);

    let mut report = Report {
        literals: results.len(),
        ..Report::default()
    };
    for (start, result) in starts.iter().zip(&results) {
        match result {
            Ok(token) => report.lines.push(render_token(token, &index, options.hex)),
            Err(err) => {
                report.failures += 1;
                report.lines.push(render_error(err, *start, &index));
            }
        }
    }
    report
}

/// Decode every start, preserving order.
///
/// The parallel path runs in a scoped pool so no worker threads outlive the
/// call; if the pool cannot be built, decoding falls back to the current
/// thread.
pub fn decode_all(
    buffer: &SourceBuffer,
    starts: &[LiteralStart],
    sequential: bool,
) -> Vec<Result<LiteralToken, ScanError>> {
    if sequential {
        return starts.iter().map(|&start| decode_one(buffer, start)).collect();
    }

    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                starts
                    .par_iter()
                    .map(|&start| decode_one(buffer, start))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), decoding sequentially");
            starts.iter().map(|&start| decode_one(buffer, start)).collect()
        })
}

fn decode_one(buffer: &SourceBuffer, start: LiteralStart) -> Result<LiteralToken, ScanError> {
    let cursor = if start.negated {
        SourceCursor::after_minus(buffer, start.offset)
    } else {
        SourceCursor::new(buffer, start.offset)
    };
    scan(cursor).or_else(|err| negated_minimum(buffer, start, err))
}

/// Java accepts `2147483648` and `9223372036854775808L` only as the operand
/// of a unary minus, where they denote the most negative value. The decoder
/// rejects both as overflow; this driver knows the expression context.
fn negated_minimum(
    buffer: &SourceBuffer,
    start: LiteralStart,
    err: ScanError,
) -> Result<LiteralToken, ScanError> {
    let kind = match err.kind {
        ScanErrorKind::MagnitudeOverflow { kind } if start.negated => kind,
        _ => return Err(err),
    };
    let raw_text = buffer.slice(err.span.start, err.span.end);
    let digits: String = raw_text
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(char::from)
        .collect();
    let value = match (kind, digits.as_str()) {
        (NumericKind::Int, "2147483648") => LiteralValue::Int(i32::MIN),
        (NumericKind::Long, "9223372036854775808") => LiteralValue::Long(i64::MIN),
        _ => return Err(err),
    };
    Ok(LiteralToken {
        radix: Radix::Decimal,
        kind,
        raw_text: raw_text.to_owned(),
        digits,
        point: None,
        exponent: None,
        value,
        negated: true,
        span: err.span,
    })
}

/// `line:col kind radix value raw`, with the unary minus folded into value
/// and raw text.
fn render_token(token: &LiteralToken, index: &LineIndex, hex: bool) -> String {
    let (line, col) = index.line_col(token.span.start);
    let value = token.signed_value();
    let value = if hex {
        value.to_hex_string()
    } else {
        value.to_string()
    };
    let minus = if token.negated { "-" } else { "" };
    format!(
        "{line}:{col} {} {} {value} {minus}{}",
        token.kind, token.radix, token.raw_text
    )
}

fn render_error(err: &ScanError, start: LiteralStart, index: &LineIndex) -> String {
    let (line, col) = index.line_col(err.span.start.max(start.offset));
    let mut out = format!("{line}:{col} error: {}", err.kind);
    for suggestion in &err.suggestions {
        out.push_str("\n    help: ");
        out.push_str(&suggestion.message);
    }
    out
}

/// Byte offsets of line starts, for 1-based `line:col` positions.
pub struct LineIndex {
    starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(
                source
                    .match_indices('\n')
                    .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
            )
            .collect();
        LineIndex { starts }
    }

    /// Line and byte column of `offset`, both 1-based.
    pub fn line_col(&self, offset: u32) -> (usize, u32) {
        let line = self.starts.partition_point(|&start| start <= offset);
        let line_start = self
            .starts
            .get(line.saturating_sub(1))
            .copied()
            .unwrap_or(0);
        (line, offset - line_start + 1)
    }
}

#[cfg(test)]
mod tests;
