//! One-shot path queries against a map file

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Args;

use campus_core::{Error, PathQuery};

use crate::command::MapSlot;
use crate::config::Config;
use crate::loader;
use crate::output::{format_output, OutputFormat, PathReport};
use crate::session::Session;

#[derive(Args)]
pub struct PathsArgs {
    /// Map file to load
    pub map_file: PathBuf,
    /// Origin building code
    pub from: String,
    /// Destination building code
    pub to: String,
    /// List every simple path instead of the first one found
    #[arg(short, long)]
    pub all: bool,
    /// Maximum number of paths to list (overrides max_paths from config)
    #[arg(short, long)]
    pub limit: Option<NonZeroUsize>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: &PathsArgs, config: &Config) -> anyhow::Result<()> {
    let mut session = Session::new(config.max_paths);
    loader::load_file(&args.map_file, &mut session)?;

    let mut query = PathQuery::new(&args.from, &args.to);
    if args.all {
        query = query.all_paths();
    }
    if let Some(max) = args.limit.or(config.max_paths) {
        query = query.with_limit(max);
    }

    tracing::info!(
        "Finding paths from {} to {} (all: {}, limit: {:?})",
        args.from,
        args.to,
        args.all,
        query.limit
    );

    let paths = match session.map(MapSlot::One).search(&query) {
        Ok(paths) => paths,
        Err(Error::NotFound(code)) => anyhow::bail!("Couldn't find building {}", code),
        Err(err) => return Err(err.into()),
    };

    let report = PathReport {
        from: &args.from,
        to: &args.to,
        all: args.all,
        paths,
    };
    print!("{}", format_output(&report, args.format));
    if args.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
