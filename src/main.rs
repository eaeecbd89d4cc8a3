mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use settings_kit::logging;

use crate::cli::Cli;

fn main() -> ExitCode {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = logging::init();
    let cli = Cli::parse();
    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", commands::failure_message(&err));
            ExitCode::FAILURE
        }
    }
}
