//! cfgmeta - configuration metadata reporter
//!
//! A command line tool that finds configuration packages below a directory and
//! reports the setters and substitutions declared in each package's metadata file.

use clap::Parser;
use console::Style;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;
mod common;
mod config;
mod discovery;
mod domain;
mod error;
mod operations;
mod ui;

use cli::{Cli, Commands};

/// Route diagnostics to stderr so they never mix with the report on stdout
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
    tracing::debug!("Verbose mode enabled");
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::ListSetters(args) => {
            commands::list_setters::run(cli.openapi_file.as_deref(), args)
        }
        Commands::Version => commands::version::run().map(|()| ExitCode::SUCCESS),
        Commands::Completions(args) => {
            commands::completions::run(args).map(|()| ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!(
                "{} {}",
                Style::new().red().bold().for_stderr().apply_to("Error:"),
                e
            );
            ExitCode::FAILURE
        }
    }
}
