//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::colors_enabled;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Success,
    Info,
    Warning,
    Error,
}

/// Format one status line. Warnings and errors color the message too.
fn format_line(level: Level, message: &str, colors: bool) -> String {
    let symbol = match level {
        Level::Success => "✓",
        Level::Info => "ℹ",
        Level::Warning => "⚠",
        Level::Error => "✗",
    };

    if !colors {
        return format!("{symbol} {message}");
    }

    match level {
        Level::Success => format!("{} {}", symbol.green().bold(), message),
        Level::Info => format!("{} {}", symbol.blue().bold(), message),
        Level::Warning => format!("{} {}", symbol.yellow().bold(), message.yellow()),
        Level::Error => format!("{} {}", symbol.red().bold(), message.red()),
    }
}

/// Print a success message to stderr.
///
/// ```no_run
/// use fob_compose_cli::ui::success;
///
/// success("production composes");
/// ```
pub fn success(message: &str) {
    eprintln!("{}", format_line(Level::Success, message, colors_enabled()));
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{}", format_line(Level::Info, message, colors_enabled()));
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{}", format_line(Level::Warning, message, colors_enabled()));
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{}", format_line(Level::Error, message, colors_enabled()));
}
