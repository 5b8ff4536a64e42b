//! savextract - extracts offzip-packed save games and files them under the
//! name the game expects.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse_from(cli::normalize_args(env::args_os())) {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::UnknownArgument => {
            let formatter = output::create_formatter(false, false, false);
            return commands::usage::execute(&*formatter);
        }
        Err(err) => err.exit(),
    };

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match run(&cli, &*formatter) {
        Ok(code) => code,
        Err(err) => {
            formatter.format_error(&err);
            error::exit_code(&err)
        }
    }
}

fn run(cli: &cli::Cli, formatter: &dyn output::OutputFormatter) -> Result<ExitCode> {
    if let Some(shell) = cli.completions {
        commands::completion::execute(shell);
        return Ok(ExitCode::SUCCESS);
    }

    match cli.format() {
        Some(format) if format.is_implemented() => commands::extract::execute(cli, formatter),
        Some(format) => commands::placeholder::execute(format, formatter),
        None => Ok(commands::usage::execute(formatter)),
    }
}
