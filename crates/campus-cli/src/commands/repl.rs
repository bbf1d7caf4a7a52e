//! Interactive test harness

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Args;

use crate::command::parse_command;
use crate::config::Config;
use crate::loader;
use crate::session::Session;

#[derive(Args, Default)]
pub struct ReplArgs {
    /// Map file to bulk-load into map 1 before reading commands
    pub map_file: Option<PathBuf>,

    /// Do not print a prompt before each command
    #[arg(long)]
    pub no_prompt: bool,
}

pub fn run(args: &ReplArgs, config: &Config) -> anyhow::Result<()> {
    let mut session = Session::new(config.max_paths);

    if let Some(path) = args.map_file.as_ref().or(config.default_map.as_ref()) {
        loader::load_file(path, &mut session)?;
    }

    let prompt = if args.no_prompt { "" } else { config.prompt.as_str() };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_loop(
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
        &mut session,
        prompt,
    )
}

/// Read commands from `input` until end of input
///
/// Command output goes to `out`; rejected lines are reported on `diag`.
/// Bytes that are not UTF-8 are replaced rather than ending the session.
pub fn run_loop<R: BufRead, W: Write, D: Write>(
    mut input: R,
    out: &mut W,
    diag: &mut D,
    session: &mut Session,
    prompt: &str,
) -> anyhow::Result<()> {
    writeln!(out, "Test harness for campus map graphs:")?;
    writeln!(out)?;
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        match parse_command(line) {
            Ok(Some(command)) => session.execute(&command, out)?,
            Ok(None) => {}
            Err(err) => {
                tracing::debug!("Rejected input {:?}: {:?}", line, err);
                writeln!(diag, "{}", err)?;
            }
        }
        write!(out, "{}", prompt)?;
        out.flush()?;
    }

    writeln!(out)?;
    tracing::debug!("Input closed while on map {}", session.current().number());
    Ok(())
}
