//! jlit: print every numeric literal in a Java source file.

use jlitc::{init_tracing, read_source, report, ReportOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let mut options = ReportOptions::default();
    let mut path: Option<&str> = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--hex" => options.hex = true,
            "--sequential" => options.sequential = true,
            "-h" | "--help" => {
                print_usage();
                return;
            }
            flag if flag.starts_with('-') => {
                eprintln!("error: unknown option '{flag}'");
                print_usage();
                std::process::exit(1);
            }
            file if path.is_none() => path = Some(file),
            extra => {
                eprintln!("error: unexpected argument '{extra}'");
                std::process::exit(1);
            }
        }
    }

    let Some(path) = path else {
        print_usage();
        std::process::exit(1);
    };

    let source = match read_source(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    let report = report(&source, options);
    for line in &report.lines {
        println!("{line}");
    }

    if report.failures > 0 {
        eprintln!(
            "{} of {} literals in '{path}' could not be decoded",
            report.failures, report.literals
        );
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: jlit <file.java> [options]");
    eprintln!();
    eprintln!("Prints `line:col kind radix value raw` for every numeric literal.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --hex           Print values as hex bit patterns / hex floats");
    eprintln!("  --sequential    Decode on one thread instead of in parallel");
    eprintln!("  -h, --help      Show this help");
    eprintln!();
    eprintln!("Set RUST_LOG=jlit=trace to log every scanned literal.");
}
