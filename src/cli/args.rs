//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Metrograph - an in-memory transit network graph service
#[derive(Parser, Debug)]
#[command(name = "metro")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the NDJSON network service
    #[command(
        long_about = "Run the NDJSON network service.\n\n\
            Accepts TCP connections and answers one JSON envelope per request \
            line. The network starts empty unless a seed file is configured; \
            state lives in process memory only.",
        after_help = "\
EXAMPLES:
    # Serve on the configured (or default) address
    metro serve

    # Serve demo data on a specific address
    metro serve --listen 127.0.0.1:4990 --seed demo.json

    # Talk to it
    printf '{\"op\":\"status\"}\\n' | nc 127.0.0.1 4990"
    )]
    Serve {
        /// Config file path (overrides the standard search locations)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Listen address (overrides config)
        #[arg(long, value_name = "ADDR")]
        listen: Option<String>,

        /// Seed file applied at startup (overrides config)
        #[arg(long, value_name = "PATH")]
        seed: Option<PathBuf>,
    },

    /// Evaluate a request script offline
    #[command(
        long_about = "Evaluate a request script offline.\n\n\
            Reads newline-delimited JSON requests from FILE (or stdin) and \
            prints one envelope per line. Request failures are ordinary \
            output, not process errors; the exit code is nonzero only for \
            I/O-level problems.",
        after_help = "\
EXAMPLES:
    # Run a script
    metro exec requests.jsonl

    # Pipe requests through
    printf '{\"op\":\"add_station\",\"id\":1,\"name\":\"Central\"}\\n' | metro exec"
    )]
    Exec {
        /// Request script; stdin when omitted
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Config file path
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Seed file applied before the script
        #[arg(long, value_name = "PATH")]
        seed: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
