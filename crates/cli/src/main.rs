//! FormCase CLI - Main Entry Point
//!
//! Sends HTML forms to the test case generation endpoint and renders,
//! copies or saves the generated JSON.

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

use formcase_cli::commands::{self, config, generate, session};
use formcase_cli::output::print_error;
use formcase_common::ClientConfig;

/// FormCase CLI - Web Form Test Case Generator
#[derive(Parser)]
#[command(name = "formcase")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file
    #[arg(long, env = "FORMCASE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Generation service base URL (overrides config and FORMCASE_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Disable colored JSON output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the sample form notice
    Sample,

    /// Generate test cases from an HTML form
    Generate(generate::GenerateArgs),

    /// Interactive session keeping the last result for copy/download
    Session(session::SessionArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(config::ConfigCommands),

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(formcase_common::default_config_path);
    let mut cfg = ClientConfig::load(&config_path)?.with_env_overrides();
    if let Some(endpoint) = cli.endpoint {
        cfg.endpoint.base_url = endpoint;
    }
    if let Some(timeout) = cli.timeout {
        cfg.endpoint.request_timeout_secs = Some(timeout);
    }

    let color = cfg.output.color && !cli.no_color && std::io::stdout().is_terminal();
    colored::control::set_override(color);

    match cli.command {
        Commands::Sample => {
            commands::build_controller(&cfg, color, None)?.request_sample_notice();
        }
        Commands::Generate(args) => {
            let controller = commands::build_controller(&cfg, color, args.download_dir.clone())?;
            generate::execute(args, controller).await?;
        }
        Commands::Session(args) => {
            let controller = commands::build_controller(&cfg, color, None)?;
            session::execute(args, controller).await?;
        }
        Commands::Config(cmd) => config::execute(cmd, &cfg, &config_path)?,
        Commands::Version => {
            println!("FormCase CLI v{}", formcase_common::VERSION);
            println!("Web form test case generator client");
            println!();
            println!("Endpoint: {}", cfg.generate_url()?);
        }
    }

    Ok(())
}
