//! System clipboard access
//!
//! Pipes text into the first platform clipboard tool that can be spawned.
//! Without one, falls back to an OSC 52 escape sequence, which most
//! terminal emulators (including over SSH) turn into a clipboard write.

use base64::Engine;
use std::io::{IsTerminal, Write};
use std::process::{Command, Stdio};
use tracing::debug;

use formcase_client::Clipboard;
use formcase_common::{Error, Result};

/// A clipboard tool invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const TOOLS: &[ClipboardTool] = &[ClipboardTool { program: "pbcopy", args: &[] }];

#[cfg(target_os = "windows")]
const TOOLS: &[ClipboardTool] = &[ClipboardTool { program: "clip", args: &[] }];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const TOOLS: &[ClipboardTool] = &[
    ClipboardTool { program: "wl-copy", args: &[] },
    ClipboardTool { program: "xclip", args: &["-selection", "clipboard"] },
    ClipboardTool { program: "xsel", args: &["--clipboard", "--input"] },
];

/// Clipboard backed by platform tools with an OSC 52 fallback
pub struct SystemClipboard {
    tools: Vec<ClipboardTool>,
    osc52_fallback: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            tools: TOOLS.to_vec(),
            osc52_fallback: true,
        }
    }

    /// Use an explicit tool list
    pub fn with_tools(tools: Vec<ClipboardTool>, osc52_fallback: bool) -> Self {
        Self {
            tools,
            osc52_fallback,
        }
    }

    fn pipe_to(tool: &ClipboardTool, text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(tool.program)
            .args(tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        Ok(child.wait()?.success())
    }

    fn write_osc52(text: &str) -> Result<()> {
        let sequence = osc52_sequence(text);
        if std::io::stderr().is_terminal() {
            let mut stderr = std::io::stderr().lock();
            stderr.write_all(sequence.as_bytes())?;
            stderr.flush()?;
            Ok(())
        } else if std::io::stdout().is_terminal() {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(sequence.as_bytes())?;
            stdout.flush()?;
            Ok(())
        } else {
            Err(Error::Clipboard(
                "no clipboard tool found and no terminal for OSC 52".to_string(),
            ))
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        for tool in &self.tools {
            match Self::pipe_to(tool, text) {
                Ok(true) => {
                    debug!("Copied {} bytes via {}", text.len(), tool.program);
                    return Ok(());
                }
                Ok(false) => debug!("{} exited with failure", tool.program),
                Err(e) => debug!("{} unavailable: {}", tool.program, e),
            }
        }

        if self.osc52_fallback {
            debug!("Falling back to OSC 52");
            return Self::write_osc52(text);
        }

        Err(Error::Clipboard("no clipboard tool available".to_string()))
    }
}

/// OSC 52 "set clipboard" escape sequence
pub fn osc52_sequence(text: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{}\x07", payload)
}
