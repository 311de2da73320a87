//! Host surface the controller drives
//!
//! A host (terminal, web view, test recorder) implements these traits for
//! the output region, user notifications, the clipboard and the save action.

use std::path::PathBuf;

use formcase_common::{Download, Notice, Result, Summary};

use crate::highlight::Span;

/// Output display region and the summary bar next to it
pub trait OutputView: Send + Sync {
    /// Show the in-flight placeholder
    fn show_loading(&self, placeholder: &str);

    /// Replace the output text
    fn show_output(&self, text: &str);

    /// Apply syntax highlighting to the text last passed to `show_output`
    fn highlight(&self, spans: &[Span<'_>]);

    /// Reveal the summary region with the given counts
    fn show_summary(&self, summary: &Summary);

    /// Replace the output with an error state
    fn show_error(&self, message: &str);
}

/// Blocking user notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// System clipboard
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Client-side save action for downloads
pub trait FileSaver: Send + Sync {
    /// Persist the download, returning where it ended up
    fn save(&self, download: &Download) -> Result<PathBuf>;
}
