//! Interactive session
//!
//! One session is one page view: an input buffer standing in for the HTML
//! text area, and a controller whose cached output lives until `quit`.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::debug;

use formcase_client::FormController;

use crate::commands::generate::read_input;
use crate::output::{print_error, print_info, print_success, print_warning};

/// Line ending a `paste` block
const PASTE_TERMINATOR: &str = ".";

#[derive(Args)]
pub struct SessionArgs {
    /// Preload the input buffer from an HTML file
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// A command typed at the session prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Sample,
    Load(PathBuf),
    Paste,
    Show,
    Generate,
    Copy,
    Download,
    Help,
    Quit,
    Empty,
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let cmd = match word {
            "" => SessionCommand::Empty,
            "sample" => SessionCommand::Sample,
            "load" if rest.is_empty() => return Err("usage: load <FILE>".to_string()),
            "load" => SessionCommand::Load(PathBuf::from(rest)),
            "paste" => SessionCommand::Paste,
            "show" => SessionCommand::Show,
            "generate" | "gen" => SessionCommand::Generate,
            "copy" => SessionCommand::Copy,
            "download" => SessionCommand::Download,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => return Err(format!("unknown command `{}` (try `help`)", other)),
        };

        if !rest.is_empty() && !matches!(cmd, SessionCommand::Load(_)) {
            return Err(format!("`{}` takes no arguments", word));
        }
        Ok(cmd)
    }
}

const HELP: &str = "\
Commands:
  sample        Show the sample form notice
  load <FILE>   Replace the input buffer with an HTML file
  paste         Replace the input buffer with pasted HTML (end with a line containing only `.`)
  show          Print the input buffer
  generate      Submit the input buffer and render the result
  copy          Copy the last generated JSON to the clipboard
  download      Save the last generated JSON as testcases_output.json
  help          Show this help
  quit          Leave the session";

pub async fn execute(args: SessionArgs, controller: FormController) -> Result<()> {
    let mut input = match args.input {
        Some(path) => read_input(Some(&path)).await?,
        None => String::new(),
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_info("FormCase session. Type `help` for commands.");

    loop {
        eprint!("formcase> ");
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let cmd = match line.parse::<SessionCommand>() {
            Ok(cmd) => cmd,
            Err(msg) => {
                print_warning(&msg);
                continue;
            }
        };
        debug!("Session command: {:?}", cmd);

        match cmd {
            SessionCommand::Empty => {}
            SessionCommand::Sample => controller.request_sample_notice(),
            SessionCommand::Load(path) => match read_input(Some(&path)).await {
                Ok(html) => {
                    print_success(&format!("Loaded {} bytes from {}", html.len(), path.display()));
                    input = html;
                }
                Err(e) => print_error(&format!("{:#}", e)),
            },
            SessionCommand::Paste => {
                input = read_paste(&mut lines).await?;
                print_success(&format!("Input buffer holds {} bytes", input.len()));
            }
            SessionCommand::Show => println!("{}", input),
            SessionCommand::Generate => {
                // Failures leave an error state; the session stays usable
                let _ = controller.generate(&input).await;
            }
            SessionCommand::Copy => {
                if let Err(e) = controller.copy_output() {
                    print_error(&e.to_string());
                }
            }
            SessionCommand::Download => {
                if let Err(e) = controller.download_output() {
                    print_error(&e.to_string());
                }
            }
            SessionCommand::Help => eprintln!("{}", HELP),
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

/// Collect lines until a lone `.` or end of input
pub async fn read_paste<R>(lines: &mut Lines<R>) -> Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut collected: Vec<String> = Vec::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim_end() == PASTE_TERMINATOR {
            break;
        }
        collected.push(line);
    }
    Ok(collected.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("sample".parse::<SessionCommand>(), Ok(SessionCommand::Sample));
        assert_eq!("  generate ".parse::<SessionCommand>(), Ok(SessionCommand::Generate));
        assert_eq!("gen".parse::<SessionCommand>(), Ok(SessionCommand::Generate));
        assert_eq!("".parse::<SessionCommand>(), Ok(SessionCommand::Empty));
        assert_eq!("exit".parse::<SessionCommand>(), Ok(SessionCommand::Quit));
        assert_eq!(
            "load forms/sign up.html".parse::<SessionCommand>(),
            Ok(SessionCommand::Load(PathBuf::from("forms/sign up.html")))
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("load".parse::<SessionCommand>().is_err());
        assert!("copy now".parse::<SessionCommand>().is_err());
        assert!("submit".parse::<SessionCommand>().unwrap_err().contains("submit"));
    }

    #[tokio::test]
    async fn test_read_paste_stops_at_terminator() {
        let data: &[u8] = b"<form>\n  <input name=\"q\">\n</form>\n.\ncopy\n";
        let mut lines = BufReader::new(data).lines();

        let html = read_paste(&mut lines).await.unwrap();
        assert_eq!(html, "<form>\n  <input name=\"q\">\n</form>");

        // The terminator is consumed, the next command is not
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("copy"));
    }

    #[tokio::test]
    async fn test_read_paste_until_eof() {
        let data: &[u8] = b"<input type=\"tel\">";
        let mut lines = BufReader::new(data).lines();
        assert_eq!(read_paste(&mut lines).await.unwrap(), "<input type=\"tel\">");
    }
}
