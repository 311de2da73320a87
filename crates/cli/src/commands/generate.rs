//! Generate Command

use clap::Args;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

use formcase_client::FormController;

#[derive(Args)]
pub struct GenerateArgs {
    /// HTML file to submit ("-" or omitted reads stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Copy the generated JSON to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Save the generated JSON as testcases_output.json
    #[arg(long)]
    pub download: bool,

    /// Directory for --download (overrides config)
    #[arg(long, requires = "download")]
    pub download_dir: Option<PathBuf>,
}

pub async fn execute(args: GenerateArgs, controller: FormController) -> Result<()> {
    let html = read_input(args.input.as_deref()).await?;

    if controller.generate(&html).await.is_err() {
        // Error state already rendered
        std::process::exit(1);
    }

    if args.copy {
        controller.copy_output()?;
    }
    if args.download {
        controller.download_output()?;
    }

    Ok(())
}

/// Read HTML from a file, or from stdin for `-` / no path
pub async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => tokio::fs::read_to_string(p)
            .await
            .with_context(|| format!("Failed to read {}", p.display())),
        _ => {
            let mut html = String::new();
            tokio::io::stdin()
                .read_to_string(&mut html)
                .await
                .context("Failed to read HTML from stdin")?;
            Ok(html)
        }
    }
}
