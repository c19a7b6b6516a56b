// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation construction
//!
//! Foreground runs use a structured argument vector — no shell, so no
//! escaping bugs to have. Detached runs need shell semantics for `nohup`,
//! output redirection, and backgrounding, so those render as one `sh -c`
//! line with every interpolated element quoted.

use std::path::{Path, PathBuf};
use std::process::Command;

use pyjob_core::{InterpreterConfig, RunnerConfig};

use crate::error::LaunchError;

/// Environment variable that overrides the interpreter's stream encoding.
/// Must be set before the interpreter starts.
pub const ENCODING_ENV: &str = "PYTHONIOENCODING";

/// Quote a value for safe use as a single shell word.
///
/// Wraps the value in single quotes; embedded single quotes use the `'\''`
/// idiom (end quote, escaped literal quote, start quote). Quoted values
/// cannot be word-split or expanded, so caller-supplied argument content
/// cannot break out of its position in the command line.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}

/// A script invocation resolved against the configured script directory.
#[derive(Debug, Clone)]
pub struct ScriptInvocation {
    script_path: PathBuf,
    args: Vec<String>,
}

impl ScriptInvocation {
    /// Resolve `{script_dir}/{name}.{script_ext}` to an absolute path and
    /// verify the file exists.
    ///
    /// The path must be absolute because detached commands execute under a
    /// shell whose working directory is unrelated to the script directory.
    /// Arguments are carried opaquely; the runner never interprets them as
    /// flags.
    pub fn resolve(
        config: &RunnerConfig,
        script_name: &str,
        args: &[String],
    ) -> Result<Self, LaunchError> {
        if script_name.is_empty() {
            return Err(LaunchError::InvalidArgument(
                "no script name provided".to_string(),
            ));
        }
        let dir = config
            .script_dir
            .as_deref()
            .ok_or_else(|| LaunchError::Config("script directory is not set".to_string()))?;

        let mut script_path = dir.join(format!("{}.{}", script_name, config.script_ext));
        if !script_path.is_absolute() {
            let cwd = std::env::current_dir().map_err(|err| {
                LaunchError::Config(format!("cannot resolve working directory: {err}"))
            })?;
            script_path = cwd.join(script_path);
        }
        if !script_path.is_file() {
            return Err(LaunchError::ScriptNotFound { path: script_path });
        }

        Ok(Self {
            script_path,
            args: args.to_vec(),
        })
    }

    /// Absolute path of the resolved script file.
    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    /// Foreground command: argv invocation with the encoding applied via the
    /// child environment.
    pub fn foreground(&self, interpreter: &InterpreterConfig) -> Command {
        let mut cmd = Command::new(&interpreter.command);
        cmd.arg(&self.script_path);
        cmd.args(&self.args);
        cmd.env(ENCODING_ENV, &interpreter.encoding);
        cmd
    }

    /// Detached command line for `sh -c`.
    ///
    /// Shape: `( ENV nohup cmd script args > out 2>&1; echo $? > status ) &`.
    /// The subshell is backgrounded so the outer shell returns immediately;
    /// `nohup` keeps the interpreter alive past the parent's exit; the
    /// trailing `echo` records the interpreter's exit code once it
    /// terminates. The output file exists (empty) from process start — the
    /// redirection creates it — so readers polling early see partial content.
    pub fn detached_line(
        &self,
        interpreter: &InterpreterConfig,
        output_path: &Path,
        status_path: &Path,
    ) -> String {
        let mut line = String::new();
        line.push_str("( ");
        line.push_str(ENCODING_ENV);
        line.push('=');
        line.push_str(&quote(&interpreter.encoding));
        line.push_str(" nohup ");
        line.push_str(&quote(&interpreter.command));
        line.push(' ');
        line.push_str(&quote(&self.script_path.to_string_lossy()));
        for arg in &self.args {
            line.push(' ');
            line.push_str(&quote(arg));
        }
        line.push_str(" > ");
        line.push_str(&quote(&output_path.to_string_lossy()));
        line.push_str(" 2>&1; echo $? > ");
        line.push_str(&quote(&status_path.to_string_lossy()));
        line.push_str(" ) &");
        line
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
