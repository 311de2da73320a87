//! Config Commands

use anyhow::Result;
use clap::Subcommand;
use std::path::Path;

use formcase_common::ClientConfig;

use crate::output::{print_success, print_warning};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn execute(cmd: ConfigCommands, config: &ClientConfig, path: &Path) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("# {}", path.display());
            print!("{}", toml::to_string_pretty(config)?);
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                print_warning(&format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ));
                return Ok(());
            }
            ClientConfig::default().save(path)?;
            print_success(&format!("Wrote {}", path.display()));
        }
    }
    Ok(())
}
