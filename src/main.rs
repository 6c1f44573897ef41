//! metro - command-line entry point

use std::process::ExitCode;

fn main() -> ExitCode {
    match metrograph::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            metrograph::ui::output::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
