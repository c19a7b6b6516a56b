// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pyjob run` - execute a script in the foreground or detached

use anyhow::Result;
use clap::Args;

use pyjob_core::RunnerConfig;
use pyjob_runner::Runner;

use crate::exit_error::ExitError;
use crate::output::{print_json, print_lines, OutputFormat};

#[derive(Args)]
pub struct RunArgs {
    /// Script name without extension, resolved under the script directory
    pub script: String,

    /// Arguments passed to the script verbatim (use `--` before values that
    /// start with a hyphen)
    pub args: Vec<String>,

    /// Launch detached and print the job id instead of waiting
    #[arg(long, short = 'd')]
    pub detach: bool,
}

pub fn run(args: RunArgs, config: &RunnerConfig, format: OutputFormat) -> Result<()> {
    let runner = Runner::new(config.clone());

    if args.detach {
        let id = runner.execute_detached(&args.script, &args.args)?;
        match format {
            OutputFormat::Text => println!("{id}"),
            OutputFormat::Json => print_json(&serde_json::json!({ "job_id": id })),
        }
        return Ok(());
    }

    let out = runner.execute(&args.script, &args.args)?;
    match format {
        OutputFormat::Text => print_lines(&out.lines),
        OutputFormat::Json => print_json(&serde_json::json!({
            "lines": out.lines,
            "exit_code": out.exit_code,
        })),
    }

    // Mirror the child's exit status so shell callers can chain on it.
    match out.exit_code {
        Some(0) => Ok(()),
        Some(code) => Err(ExitError::child_status(code).into()),
        None => Err(ExitError::new(1, "script terminated by signal").into()),
    }
}
