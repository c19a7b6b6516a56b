// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for launching scripts and retrieving results.

use std::path::PathBuf;

use pyjob_core::JobId;
use thiserror::Error;

/// Errors that can occur while launching a script.
///
/// All variants surface synchronously to the caller of the triggering
/// operation; nothing is retried internally.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Script or output directory unset or missing. Fatal before any spawn.
    #[error("configuration error: {0}")]
    Config(String),

    /// Caller-supplied value rejected before any process was spawned.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The availability probe classified the interpreter as not runnable.
    #[error("interpreter '{command}' is not available on this system")]
    InterpreterUnavailable {
        /// The command name that was probed.
        command: String,
    },

    /// The resolved script path does not exist at command-build time.
    #[error("script not found: {}", path.display())]
    ScriptNotFound {
        /// Absolute path the script name resolved to.
        path: PathBuf,
    },

    /// Process spawn failed for reasons outside the above (e.g. resource
    /// exhaustion).
    #[error("failed to spawn process: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the result store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No output file for this id. A job that was never issued and a job
    /// whose output was already pruned are indistinguishable here.
    #[error("no stored result for job {id}")]
    NotFound {
        /// The id that was looked up.
        id: JobId,
    },

    /// The prune scan completed but could not remove every matching file.
    #[error("prune removed {removed} file(s) but failed to remove {failed}")]
    PruneIncomplete {
        /// Files successfully removed before and after the failures.
        removed: usize,
        /// Files that matched the age cutoff but could not be removed.
        failed: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Union error for the [`Runner`](crate::Runner) facade.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Launch(#[from] LaunchError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
