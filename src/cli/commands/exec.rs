//! exec command - evaluate a request script offline

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::service::{SeedData, Service};
use crate::ui::output::{self, Verbosity};

/// Read NDJSON requests from a file or stdin and print one envelope per
/// line.
///
/// Request failures are data (failure envelopes on stdout); only I/O-level
/// problems produce a nonzero exit.
pub fn exec(
    file: Option<&Path>,
    config_path: Option<&Path>,
    seed: Option<&Path>,
    verbosity: Verbosity,
) -> Result<()> {
    let config = Config::load(config_path).context("failed to load configuration")?;

    let service = Service::new(config.history_capacity());
    if let Some(path) = seed.or(config.seed()) {
        let data = SeedData::load(path)?;
        data.apply(&service)?;
        output::debug(format!("seed applied from {}", path.display()), verbosity);
    }

    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in reader.lines() {
        let line = line.context("failed to read request line")?;
        if line.trim().is_empty() {
            continue;
        }
        let envelope = service.apply_json(&line);
        writeln!(out, "{}", envelope.to_json()).context("failed to write envelope")?;
    }

    Ok(())
}
