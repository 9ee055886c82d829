//! WAR packager CLI
//!
//! Resolves the effective packaging configuration from a configuration file,
//! an optional BOM and an optional BOM environment.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let result = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };
    if let Err(e) = result {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} WAR packager configuration resolver", "warpack".green().bold());
            println!();
            println!("Run {} for available commands.", "warpack --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve { source, json } => commands::run_resolve(&source, json),
        Commands::Paths { source } => commands::run_paths(&source),
        Commands::Plugin {
            artifact_id,
            source,
        } => commands::run_plugin(&artifact_id, &source),
        Commands::Resource { id, source } => commands::run_resource(&id, &source),
        Commands::Demo { json } => commands::run_demo(json),
    }
}
