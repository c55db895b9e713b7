use pretty_assertions::assert_eq;

use super::*;

fn sequential() -> ReportOptions {
    ReportOptions {
        sequential: true,
        ..ReportOptions::default()
    }
}

#[test]
fn line_index_positions() {
    let index = LineIndex::new("ab\ncd\n\nx");
    assert_eq!(index.line_col(0), (1, 1));
    assert_eq!(index.line_col(1), (1, 2));
    assert_eq!(index.line_col(3), (2, 1));
    assert_eq!(index.line_col(6), (3, 1));
    assert_eq!(index.line_col(7), (4, 1));
}

#[test]
fn renders_values_and_errors() {
    let source = "int a = 0x12;\nlong b = -9223372036854775808L;\nint c = 0b2;\n";
    let report = report(source, sequential());
    assert_eq!(report.literals, 3);
    assert_eq!(report.failures, 1);
    assert_eq!(report.lines[0], "1:9 int hex 18 0x12");
    assert_eq!(
        report.lines[1],
        "2:11 long decimal 0x8000000000000000L -9223372036854775808L"
    );
    assert_eq!(
        report.lines[2],
        "3:11 error: invalid digit '2' in binary literal\n    help: binary literals use only the digits 0 and 1"
    );
}

#[test]
fn most_negative_decimal_needs_a_unary_minus() {
    let source = "int a = -2_147_483_648; int b = 2147483648; int c = -2147483649;";
    let report = report(source, sequential());
    assert_eq!(report.literals, 3);
    assert_eq!(report.failures, 2);
    assert_eq!(report.lines[0], "1:10 int decimal 0x80000000 -2_147_483_648");
    assert!(
        report.lines[1].starts_with("1:33 error: "),
        "{}",
        report.lines[1]
    );
    assert!(
        report.lines[2].starts_with("1:54 error: "),
        "{}",
        report.lines[2]
    );
}

#[test]
fn hex_option_prints_encodings() {
    let options = ReportOptions {
        hex: true,
        sequential: true,
    };
    let report = report("double d = 1.0; int i = -1;", options);
    assert_eq!(
        report.lines,
        ["1:12 double decimal 0x1.0p0 1.0", "1:26 int decimal 0xffffffff -1"]
    );
}

#[test]
fn parallel_and_sequential_agree() {
    let source: String = (0..200)
        .map(|i| format!("long v{i} = {i}L * 0x{i:x} - .{i}e{i};\n"))
        .collect();
    let parallel = report(&source, ReportOptions::default());
    let sequential = report(&source, sequential());
    assert_eq!(parallel, sequential);
    assert_eq!(parallel.failures, 0);
    assert_eq!(parallel.literals, 600);
}
