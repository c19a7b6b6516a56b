// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pyjob prune` - remove stored outputs past the retention cutoff

use std::time::Duration;

use anyhow::Result;
use clap::Args;

use pyjob_core::RunnerConfig;
use pyjob_runner::Runner;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct PruneArgs {
    /// Remove outputs older than this many seconds (0 removes everything)
    #[arg(long, default_value = "0")]
    pub max_age_secs: u64,
}

pub fn prune(args: PruneArgs, config: &RunnerConfig, format: OutputFormat) -> Result<()> {
    let runner = Runner::new(config.clone());
    let removed = runner.prune(Duration::from_secs(args.max_age_secs))?;

    match format {
        OutputFormat::Text => println!("Pruned {removed} output file(s)"),
        OutputFormat::Json => print_json(&serde_json::json!({ "removed": removed })),
    }
    Ok(())
}
