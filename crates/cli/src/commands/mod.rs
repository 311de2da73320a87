//! CLI Commands

pub mod config;
pub mod generate;
pub mod session;

use std::path::PathBuf;
use std::sync::Arc;

use formcase_client::{FormController, HttpTransport, Surface};
use formcase_common::ClientConfig;

use crate::clipboard::SystemClipboard;
use crate::saver::DirectorySaver;
use crate::terminal::{TerminalNotifier, TerminalView};

/// Build a controller wired to the terminal, system clipboard and a
/// download directory
pub fn build_controller(
    config: &ClientConfig,
    color: bool,
    download_dir: Option<PathBuf>,
) -> anyhow::Result<FormController> {
    let transport = HttpTransport::new(config)?;
    tracing::debug!("Generation endpoint: {}", transport.url());

    let surface = Surface {
        view: Arc::new(TerminalView::new(color)),
        notifier: Arc::new(TerminalNotifier),
        clipboard: Arc::new(SystemClipboard::new()),
        saver: Arc::new(DirectorySaver::new(
            download_dir.unwrap_or_else(|| config.download_dir()),
        )),
    };

    Ok(FormController::new(Arc::new(transport), surface))
}
