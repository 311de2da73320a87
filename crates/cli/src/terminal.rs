//! Terminal host surface

use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;
use std::io::Write;
use std::time::Duration;

use formcase_client::{Notifier, OutputView, Span};
use formcase_common::{Notice, Summary};

use crate::output::{paint_all, print_error, print_notice};

/// Output region and notices rendered on the terminal
pub struct TerminalView {
    color: bool,
    spinner: Mutex<Option<ProgressBar>>,
    /// Text waiting for its highlight pass when color is on
    pending: Mutex<Option<String>>,
}

impl TerminalView {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            spinner: Mutex::new(None),
            pending: Mutex::new(None),
        }
    }

    fn stop_spinner(&self) {
        if let Some(spinner) = self.spinner.lock().take() {
            spinner.finish_and_clear();
        }
    }

    fn write_stdout(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", text);
        let _ = stdout.flush();
    }
}

impl OutputView for TerminalView {
    fn show_loading(&self, placeholder: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(placeholder.trim_end().to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        if let Some(previous) = self.spinner.lock().replace(spinner) {
            previous.finish_and_clear();
        }
    }

    fn show_output(&self, text: &str) {
        self.stop_spinner();
        if self.color {
            *self.pending.lock() = Some(text.to_string());
        } else {
            self.write_stdout(text);
        }
    }

    fn highlight(&self, spans: &[Span<'_>]) {
        if self.pending.lock().take().is_some() {
            self.write_stdout(&paint_all(spans));
        }
    }

    fn show_summary(&self, summary: &Summary) {
        eprintln!("{}", summary);
    }

    fn show_error(&self, message: &str) {
        self.stop_spinner();
        self.pending.lock().take();
        print_error(message);
    }
}

/// Prints notices. Generation failures are already shown by `TerminalView::show_error`.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        if let Notice::GenerationFailed { .. } = notice {
            tracing::debug!("{}", notice.message());
            return;
        }
        print_notice(notice.level(), &notice.message());
    }
}
