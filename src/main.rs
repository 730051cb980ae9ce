//! Pesqueiro CLI

use std::process::ExitCode;

use clap::Parser;

mod cli;

#[expect(clippy::print_stderr, reason = "CLI error reporting")]
fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
