//! Bulk loading of a campus map file into a session
//!
//! A map file uses the harness syntax, one entry per line:
//!
//! ```text
//! # buildings are registered and added to map 1
//! b MC Mathematics and Computer
//! b DC Davis Centre
//! # edges join buildings already in map 1
//! e MC DC tunnel
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

use crate::command::{parse_command, Command};
use crate::session::Session;

/// Counts of what a load accepted and skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub buildings: usize,
    pub edges: usize,
    pub skipped: usize,
}

/// Load a map file from disk
pub fn load_file(path: &Path, session: &mut Session) -> anyhow::Result<LoadSummary> {
    let file = File::open(path)
        .with_context(|| format!("Could not open map file \"{}\"", path.display()))?;
    let summary = load_map(BufReader::new(file), session)?;

    tracing::info!(
        "Loaded {} buildings and {} edges from {} ({} lines skipped)",
        summary.buildings,
        summary.edges,
        path.display(),
        summary.skipped
    );
    Ok(summary)
}

/// Load map entries from any reader
///
/// Lines that fail to parse, apply, or decode as UTF-8 are logged and
/// skipped; only I/O errors abort the load.
pub fn load_map<R: BufRead>(mut reader: R, session: &mut Session) -> anyhow::Result<LoadSummary> {
    let mut summary = LoadSummary::default();
    let mut buf = Vec::new();
    let mut lineno = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read map line {}", lineno + 1))?;
        if read == 0 {
            break;
        }
        lineno += 1;

        let applied = match std::str::from_utf8(&buf) {
            Err(err) => Err(format!("not valid UTF-8 ({})", err)),
            Ok(line) => apply_line(line, session, &mut summary),
        };

        if let Err(reason) = applied {
            tracing::warn!("Skipping map line {}: {}", lineno, reason);
            summary.skipped += 1;
        }
    }

    Ok(summary)
}

fn apply_line(line: &str, session: &mut Session, summary: &mut LoadSummary) -> Result<(), String> {
    match parse_command(line) {
        Ok(None) => Ok(()),
        Ok(Some(Command::AddBuilding { code, name })) => session
            .load_building(&code, &name)
            .map(|()| summary.buildings += 1)
            .map_err(|err| err.to_string()),
        Ok(Some(Command::AddEdge {
            from,
            to,
            connector,
        })) => session
            .load_edge(&from, &to, &connector)
            .map(|()| summary.edges += 1)
            .map_err(|err| err.to_string()),
        Ok(Some(other)) => Err(format!("{:?} is not allowed in a map file", other)),
        Err(err) => Err(err.to_string()),
    }
}
