//! Campus CLI - Test harness and command line interface for campus maps

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod command;
mod commands;
mod config;
mod loader;
mod output;
mod session;

use commands::{completions, paths, repl, show};
use config::{config_file_path, Config};

#[derive(Parser)]
#[command(name = "campus")]
#[command(author, version, about = "Campus map graphs of buildings and connectors")]
pub struct Cli {
    /// Config file (default: <config dir>/campus-map/config.toml)
    #[arg(short, long, global = true, env = "CAMPUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Runs the interactive harness when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config_file_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive test harness on stdin
    Repl(repl::ReplArgs),
    /// Load a map file and print it
    Show(show::ShowArgs),
    /// Find paths between two buildings of a map file
    Paths(paths::PathsArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity; stdout carries harness output
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting campus CLI");

    let config_path = cli.config_path();
    let config = Config::load_from(&config_path);

    match &cli.command {
        None => repl::run(&repl::ReplArgs::default(), &config)?,
        Some(Commands::Repl(args)) => repl::run(args, &config)?,
        Some(Commands::Show(args)) => show::run(args, &config)?,
        Some(Commands::Paths(args)) => paths::run(args, &config)?,
        Some(Commands::Config(args)) => commands::config::run(args, &config_path)?,
        Some(Commands::Completions(args)) => completions::run(args)?,
    }

    Ok(())
}
