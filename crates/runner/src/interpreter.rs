// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interpreter availability probe

use std::io;
use std::process::{Command, Stdio};

use pyjob_core::InterpreterConfig;

use crate::error::LaunchError;

/// Shell exit code for "command invoked cannot execute".
const EXIT_NOT_EXECUTABLE: i32 = 126;
/// Shell exit code for "command not found".
const EXIT_NOT_FOUND: i32 = 127;

/// Verify the configured interpreter is runnable on this host.
///
/// Spawns the command bare with all stdio null and inspects the outcome.
/// A spawn error of kind `NotFound` or `PermissionDenied` (the argv
/// equivalents of shell exit 127/126), or an exit status of 126/127 (the
/// command resolved to a wrapper that failed the same way), classifies as
/// [`LaunchError::InterpreterUnavailable`]. Any other exit status counts as
/// available, including nonzero exits from the interpreter's own behavior
/// when run bare.
///
/// Costs one throwaway process per call. Availability can change between
/// calls (the interpreter may be uninstalled between requests), so results
/// are not cached.
pub fn verify(interpreter: &InterpreterConfig) -> Result<(), LaunchError> {
    let unavailable = || LaunchError::InterpreterUnavailable {
        command: interpreter.command.clone(),
    };

    let status = Command::new(&interpreter.command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) => match status.code() {
            Some(EXIT_NOT_EXECUTABLE) | Some(EXIT_NOT_FOUND) => Err(unavailable()),
            _ => Ok(()),
        },
        Err(err) => match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => Err(unavailable()),
            _ => Err(LaunchError::Spawn { source: err }),
        },
    }
}

#[cfg(test)]
#[path = "interpreter_tests.rs"]
mod tests;
