// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pyjob result` / `pyjob status` - inspect detached jobs

use anyhow::Result;
use clap::Args;

use pyjob_core::{JobId, RunnerConfig};
use pyjob_runner::{JobStatus, Runner};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ResultArgs {
    /// Job id returned by `pyjob run --detach`
    pub id: String,
}

#[derive(Args)]
pub struct StatusArgs {
    /// Job id returned by `pyjob run --detach`
    pub id: String,
}

pub fn result(args: ResultArgs, config: &RunnerConfig, format: OutputFormat) -> Result<()> {
    let runner = Runner::new(config.clone());
    let id = JobId::from(args.id.as_str());
    let output = runner.result(&id)?;

    match format {
        // Raw bytes as captured; no trailing newline added.
        OutputFormat::Text => print!("{output}"),
        OutputFormat::Json => {
            let status = runner.status(&id).ok().map(|s| status_json(&s));
            print_json(&serde_json::json!({
                "job_id": id,
                "output": output,
                "status": status,
            }));
        }
    }
    Ok(())
}

pub fn status(args: StatusArgs, config: &RunnerConfig, format: OutputFormat) -> Result<()> {
    let runner = Runner::new(config.clone());
    let id = JobId::from(args.id.as_str());
    let status = runner.status(&id)?;

    match format {
        OutputFormat::Text => match status {
            JobStatus::Running => println!("running"),
            JobStatus::Finished(code) => println!("finished {code}"),
        },
        OutputFormat::Json => print_json(&serde_json::json!({
            "job_id": id,
            "status": status_json(&status),
        })),
    }
    Ok(())
}

fn status_json(status: &JobStatus) -> serde_json::Value {
    match status {
        JobStatus::Running => serde_json::json!({ "state": "running" }),
        JobStatus::Finished(code) => {
            serde_json::json!({ "state": "finished", "exit_code": code })
        }
    }
}
