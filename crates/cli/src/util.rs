//! Shared utilities for CLI commands

use std::io::Write;
use tracing::Level;

/// Name the current binary was invoked as (`argv[0]`)
pub fn program_name(fallback: &str) -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_string())
}

/// Print the one-line usage message for a tool taking a single path
pub fn print_usage<W: Write>(out: &mut W, program: &str, argument: &str) -> std::io::Result<()> {
    writeln!(out, "usage: {} <{}>", program, argument)
}

/// Install the stderr log subscriber
///
/// Stdout carries the tool's actual output, so logs never go there.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Format file size in human-readable format
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
