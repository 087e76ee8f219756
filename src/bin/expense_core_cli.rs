use std::process::ExitCode;

use clap::Parser;
use expense_core::cli::{self, Cli};
use expense_core::core::SystemClock;

fn main() -> ExitCode {
    expense_core::init();
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    match cli::run(cli, &SystemClock) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
