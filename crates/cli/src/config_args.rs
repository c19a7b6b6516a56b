// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Global configuration flags shared by every subcommand.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use pyjob_core::{InterpreterConfig, RunnerConfig};

use crate::env;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Directory containing scripts (env: PYJOB_SCRIPT_DIR)
    #[arg(long, global = true)]
    pub script_dir: Option<PathBuf>,

    /// Directory for detached job output (env: PYJOB_OUTPUT_DIR)
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Python major version to run, 2 or 3 (env: PYJOB_PYTHON)
    #[arg(long, global = true)]
    pub python: Option<u8>,

    /// Interpreter command override (env: PYJOB_INTERPRETER)
    #[arg(long, global = true, conflicts_with = "python")]
    pub interpreter: Option<String>,

    /// Stream encoding passed to the child via PYTHONIOENCODING
    #[arg(long, global = true)]
    pub encoding: Option<String>,

    /// Script filename extension (env: PYJOB_SCRIPT_EXT)
    #[arg(long, global = true)]
    pub script_ext: Option<String>,
}

impl ConfigArgs {
    /// Resolve flags and env fallbacks into an immutable runner config.
    ///
    /// Precedence per setting: explicit flag, then environment variable,
    /// then library default.
    pub fn to_config(&self) -> Result<RunnerConfig> {
        let mut config = RunnerConfig::new();

        if let Some(dir) = self.script_dir.clone().or_else(env::script_dir) {
            config = config.script_dir(dir);
        }
        if let Some(dir) = self.output_dir.clone().or_else(env::output_dir) {
            config = config.output_dir(dir);
        }
        if let Some(ext) = self.script_ext.clone().or_else(env::script_ext) {
            config = config.script_ext(ext);
        }

        let mut interpreter = if let Some(cmd) = &self.interpreter {
            InterpreterConfig::with_command(cmd.as_str())
        } else if let Some(version) = self.python {
            InterpreterConfig::for_version(version)?
        } else if let Some(cmd) = env::interpreter() {
            InterpreterConfig::with_command(cmd)
        } else if let Some(version) = env::python_version() {
            InterpreterConfig::for_version(version)?
        } else {
            InterpreterConfig::default()
        };
        if let Some(encoding) = &self.encoding {
            interpreter = interpreter.encoding(encoding.clone());
        }

        Ok(config.interpreter(interpreter))
    }
}

#[cfg(test)]
#[path = "config_args_tests.rs"]
mod tests;
