// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! `pyjob` - run Python scripts foreground or detached and track their output

mod commands;
mod config_args;
mod env;
mod exit_error;
mod output;

use clap::{Parser, Subcommand};

use crate::config_args::ConfigArgs;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "pyjob", version, about = "Run Python scripts foreground or detached")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a script in the foreground or detached
    Run(commands::run::RunArgs),
    /// Print the stored output of a detached job
    Result(commands::result::ResultArgs),
    /// Show whether a detached job is still running
    Status(commands::result::StatusArgs),
    /// Remove stored outputs past the retention cutoff
    Prune(commands::prune::PruneArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.json);

    let result = cli.config.to_config().and_then(|config| match cli.command {
        Command::Run(args) => commands::run::run(args, &config, format),
        Command::Result(args) => commands::result::result(args, &config, format),
        Command::Status(args) => commands::result::status(args, &config, format),
        Command::Prune(args) => commands::prune::prune(args, &config, format),
    });

    if let Err(err) = result {
        match err.downcast::<ExitError>() {
            Ok(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("error: {exit}");
                }
                std::process::exit(exit.code);
            }
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
