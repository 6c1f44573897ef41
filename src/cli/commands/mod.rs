//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! Each handler loads configuration, builds the [`crate::service::Service`],
//! and drives it; none of them contain graph logic.

mod completion;
mod exec;
mod serve;

pub use completion::completion;
pub use exec::exec;
pub use serve::serve;

use anyhow::Result;

use crate::cli::args::Command;
use crate::ui::Verbosity;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, verbosity: Verbosity) -> Result<()> {
    match command {
        Command::Serve {
            config,
            listen,
            seed,
        } => serve(config.as_deref(), listen.as_deref(), seed.as_deref(), verbosity),
        Command::Exec { file, config, seed } => {
            exec(file.as_deref(), config.as_deref(), seed.as_deref(), verbosity)
        }
        Command::Completion { shell } => completion(shell),
    }
}
