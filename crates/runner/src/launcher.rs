// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution dispatch
//!
//! Each call walks the same machine: preflight the configuration, probe the
//! interpreter, then dispatch foreground (block and capture) or detached
//! (spawn the wrapper, return the id). Failed launches are reported once and
//! never retried.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use pyjob_core::{JobId, RunnerConfig};

use crate::command::ScriptInvocation;
use crate::error::LaunchError;
use crate::interpreter;
use crate::store;

/// Captured result of a foreground run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// The child's stdout lines in produced order, followed by any stderr
    /// lines. A pipe per stream means exact interleaving is not preserved.
    pub lines: Vec<String>,
    /// Child exit code; `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run a script in the foreground and capture its output.
///
/// Blocks the calling thread for the child's full runtime. No timeout is
/// enforced; a hung child blocks indefinitely unless the host environment
/// imposes a limit.
pub fn run_foreground(
    config: &RunnerConfig,
    script_name: &str,
    args: &[String],
) -> Result<RunOutput, LaunchError> {
    require_dir(config.script_dir.as_deref(), "script")?;
    require_script_name(script_name)?;
    interpreter::verify(&config.interpreter)?;
    let invocation = ScriptInvocation::resolve(config, script_name, args)?;

    tracing::info!(script = script_name, mode = "foreground", "launching script");
    let output = invocation
        .foreground(&config.interpreter)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| {
            tracing::error!(script = script_name, error = %source, "spawn failed");
            LaunchError::Spawn { source }
        })?;

    let mut lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect();
    lines.extend(
        String::from_utf8_lossy(&output.stderr)
            .lines()
            .map(str::to_string),
    );
    Ok(RunOutput {
        lines,
        exit_code: output.status.code(),
    })
}

/// Launch a script detached and return its job id without waiting.
///
/// The child survives the caller's exit (`nohup`), writes stdout+stderr to
/// `{output_dir}/{id}.{out_ext}`, and records its exit code in a `.status`
/// sidecar when it terminates. Once launched there is no cancellation; the
/// job runs to completion or system-level termination.
pub fn run_detached(
    config: &RunnerConfig,
    script_name: &str,
    args: &[String],
) -> Result<JobId, LaunchError> {
    require_dir(config.script_dir.as_deref(), "script")?;
    let output_dir = require_dir(config.output_dir.as_deref(), "output")?;
    require_script_name(script_name)?;
    interpreter::verify(&config.interpreter)?;
    let invocation = ScriptInvocation::resolve(config, script_name, args)?;

    let id = JobId::new();
    let output_path = store::output_file(output_dir, &id, &config.out_ext);
    let status_path = store::status_file(output_dir, &id);
    let line = invocation.detached_line(&config.interpreter, &output_path, &status_path);

    tracing::info!(script = script_name, job_id = %id, mode = "detached", "launching script");
    let status = Command::new("sh")
        .arg("-c")
        .arg(&line)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| {
            tracing::error!(script = script_name, error = %source, "spawn failed");
            LaunchError::Spawn { source }
        })?;

    // The outer shell only backgrounds the subshell; it exiting nonzero means
    // the wrapper itself never started.
    if !status.success() {
        return Err(LaunchError::Spawn {
            source: io::Error::other(format!("detach shell exited with {status}")),
        });
    }
    Ok(id)
}

fn require_script_name(script_name: &str) -> Result<(), LaunchError> {
    if script_name.is_empty() {
        return Err(LaunchError::InvalidArgument(
            "no script name provided".to_string(),
        ));
    }
    Ok(())
}

fn require_dir<'a>(dir: Option<&'a Path>, what: &str) -> Result<&'a Path, LaunchError> {
    let dir = dir.ok_or_else(|| LaunchError::Config(format!("{what} directory is not set")))?;
    if !dir.is_dir() {
        return Err(LaunchError::Config(format!(
            "{what} directory does not exist: {}",
            dir.display()
        )));
    }
    Ok(dir)
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
