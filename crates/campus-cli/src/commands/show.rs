//! Print a loaded campus map

use std::path::PathBuf;

use clap::Args;

use crate::command::MapSlot;
use crate::config::Config;
use crate::loader;
use crate::output::{format_output, GraphReport, OutputFormat};
use crate::session::Session;

#[derive(Args)]
pub struct ShowArgs {
    /// Map file to load
    pub map_file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: &ShowArgs, config: &Config) -> anyhow::Result<()> {
    let mut session = Session::new(config.max_paths);
    let summary = loader::load_file(&args.map_file, &mut session)?;
    if summary.skipped > 0 {
        eprintln!("Skipped {} invalid line(s) in {}", summary.skipped, args.map_file.display());
    }

    tracing::debug!("Registry holds {} buildings", session.registry().len());

    let graph = session.map(MapSlot::One);
    print!("{}", format_output(&GraphReport::new(graph), args.format));
    if args.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
