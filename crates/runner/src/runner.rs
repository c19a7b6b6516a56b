// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Public entry point bundling one immutable configuration
//!
//! A [`Runner`] holds a [`RunnerConfig`] value and nothing else; it can be
//! shared freely across threads because no call mutates it. Execution mode is
//! chosen per call — [`Runner::execute`] blocks, [`Runner::execute_detached`]
//! returns a [`JobId`] immediately.

use std::time::Duration;

use pyjob_core::{JobId, RunnerConfig};

use crate::error::{LaunchError, RunnerError};
use crate::launcher::{self, RunOutput};
use crate::store::{JobStatus, ResultStore};

/// Executes scripts and tracks detached results under one configuration.
#[derive(Debug, Clone)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run a script in the foreground; blocks until the child exits.
    pub fn execute(&self, script_name: &str, args: &[String]) -> Result<RunOutput, RunnerError> {
        Ok(launcher::run_foreground(&self.config, script_name, args)?)
    }

    /// Launch a script detached; returns the job id without waiting.
    pub fn execute_detached(
        &self,
        script_name: &str,
        args: &[String],
    ) -> Result<JobId, RunnerError> {
        Ok(launcher::run_detached(&self.config, script_name, args)?)
    }

    /// Stored output of a detached job.
    pub fn result(&self, id: &JobId) -> Result<String, RunnerError> {
        Ok(self.store()?.get(id)?)
    }

    /// Completion state of a detached job.
    pub fn status(&self, id: &JobId) -> Result<JobStatus, RunnerError> {
        Ok(self.store()?.status(id)?)
    }

    /// Remove one detached job's stored output.
    pub fn delete(&self, id: &JobId) -> Result<(), RunnerError> {
        Ok(self.store()?.delete(id)?)
    }

    /// Remove stored outputs older than `max_age`; returns how many.
    pub fn prune(&self, max_age: Duration) -> Result<usize, RunnerError> {
        Ok(self.store()?.prune(max_age)?)
    }

    /// The result store for the configured output directory.
    pub fn store(&self) -> Result<ResultStore, LaunchError> {
        let dir = self
            .config
            .output_dir
            .as_deref()
            .ok_or_else(|| LaunchError::Config("output directory is not set".to_string()))?;
        Ok(ResultStore::new(dir, self.config.out_ext.as_str()))
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
