//! Command-line driver for the numeric literal decoder.
//!
//! Finds every numeric literal in a Java source file, decodes them in
//! parallel, and renders one line per literal.

mod locate;
mod report;

use std::sync::Once;

pub use locate::{literal_starts, LiteralStart};
pub use report::{decode_all, report, LineIndex, Report, ReportOptions};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the driver.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=jlit=trace` to see every scanned literal.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

/// Read a source file, turning I/O failures into a user-facing message.
pub fn read_source(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
