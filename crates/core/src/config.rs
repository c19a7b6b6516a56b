// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Immutable runner configuration
//!
//! A [`RunnerConfig`] is a value, not shared state: setters consume and return
//! the config, and every execution borrows it read-only. Reusing one config
//! across concurrent executions therefore cannot cause cross-call
//! interference.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported python version selector: {0} (expected 2 or 3)")]
    InvalidPythonVersion(u8),
}

/// Interpreter selection: executable name plus stream encoding.
///
/// The encoding is applied to the child via `PYTHONIOENCODING`, which must be
/// set before the interpreter starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Executable resolved from the host's command search path
    pub command: String,
    /// Text encoding for the child's stdin/stdout/stderr
    pub encoding: String,
}

impl InterpreterConfig {
    pub const DEFAULT_ENCODING: &'static str = "utf8";

    /// Resolve the interpreter command for a major Python version.
    ///
    /// Only 2 and 3 are meaningful selectors; anything else is rejected.
    pub fn for_version(version: u8) -> Result<Self, ConfigError> {
        let command = match version {
            2 => "python2",
            3 => "python3",
            other => return Err(ConfigError::InvalidPythonVersion(other)),
        };
        Ok(Self::with_command(command))
    }

    /// Use an explicit interpreter command (virtualenvs, test stubs)
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            encoding: Self::DEFAULT_ENCODING.to_string(),
        }
    }

    crate::setters! {
        into {
            /// Override the executable name
            command: String,
            /// Override the stream encoding passed via `PYTHONIOENCODING`
            encoding: String,
        }
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self::with_command("python3")
    }
}

/// Configuration shared by every execution.
///
/// Both directories are owned by the host: pyjob never creates them, only
/// reads/writes/deletes files inside them. `script_dir` needs read+execute
/// access, `output_dir` read+write+delete.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory holding `{name}.{script_ext}` files; unset until configured
    pub script_dir: Option<PathBuf>,
    /// Directory for detached job output files; unset until configured
    pub output_dir: Option<PathBuf>,
    pub interpreter: InterpreterConfig,
    /// Script filename extension (without dot)
    pub script_ext: String,
    /// Output filename extension (without dot)
    pub out_ext: String,
}

impl RunnerConfig {
    pub const DEFAULT_SCRIPT_EXT: &'static str = "py";
    pub const DEFAULT_OUT_EXT: &'static str = "out";

    pub fn new() -> Self {
        Self {
            script_dir: None,
            output_dir: None,
            interpreter: InterpreterConfig::default(),
            script_ext: Self::DEFAULT_SCRIPT_EXT.to_string(),
            out_ext: Self::DEFAULT_OUT_EXT.to_string(),
        }
    }

    crate::setters! {
        into {
            /// Filename extension scripts are expected to carry
            script_ext: String,
            /// Filename extension for persisted job output
            out_ext: String,
        }
        set {
            interpreter: InterpreterConfig,
        }
        option {
            /// Directory scripts are resolved under
            script_dir: PathBuf,
            /// Directory detached output files are written to
            output_dir: PathBuf,
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
