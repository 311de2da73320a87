//! Output formatting for CLI
//!
//! Generated JSON goes to stdout; notices, the summary line and prompts go
//! to stderr so the JSON can be piped.

use colored::{ColoredString, Colorize};

use formcase_client::{Span, TokenKind};
use formcase_common::NoticeLevel;

/// Print success message
pub fn print_success(message: &str) {
    eprintln!("✅ {}", message);
}

/// Print error message
pub fn print_error(message: &str) {
    eprintln!("❌ {}", message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    eprintln!("⚠️  {}", message);
}

/// Print info message
pub fn print_info(message: &str) {
    eprintln!("ℹ️  {}", message);
}

/// Print a message at the given notice level
pub fn print_notice(level: NoticeLevel, message: &str) {
    match level {
        NoticeLevel::Info => print_info(message),
        NoticeLevel::Success => print_success(message),
        NoticeLevel::Warning => print_warning(message),
        NoticeLevel::Error => print_error(message),
    }
}

/// Style one highlighted span
pub fn paint(span: &Span<'_>) -> ColoredString {
    match span.kind {
        TokenKind::Key => span.text.cyan(),
        TokenKind::String => span.text.green(),
        TokenKind::Number => span.text.yellow(),
        TokenKind::Boolean => span.text.magenta(),
        TokenKind::Null => span.text.bright_black(),
        TokenKind::Punctuation | TokenKind::Whitespace => span.text.normal(),
        TokenKind::Other => span.text.red(),
    }
}

/// Render spans as an ANSI-colored string
pub fn paint_all(spans: &[Span<'_>]) -> String {
    spans.iter().map(|s| paint(s).to_string()).collect()
}
