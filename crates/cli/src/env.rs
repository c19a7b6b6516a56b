// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.
//!
//! Every flag with an env fallback reads it here, so the variable names
//! appear in exactly one place.

use std::path::PathBuf;

/// Script directory fallback: `PYJOB_SCRIPT_DIR`
pub fn script_dir() -> Option<PathBuf> {
    std::env::var("PYJOB_SCRIPT_DIR")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Output directory fallback: `PYJOB_OUTPUT_DIR`
pub fn output_dir() -> Option<PathBuf> {
    std::env::var("PYJOB_OUTPUT_DIR")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Interpreter command override fallback: `PYJOB_INTERPRETER`
pub fn interpreter() -> Option<String> {
    std::env::var("PYJOB_INTERPRETER")
        .ok()
        .filter(|s| !s.is_empty())
}

/// Python major version fallback: `PYJOB_PYTHON`
pub fn python_version() -> Option<u8> {
    std::env::var("PYJOB_PYTHON")
        .ok()
        .and_then(|s| s.parse::<u8>().ok())
}

/// Script extension fallback: `PYJOB_SCRIPT_EXT`
pub fn script_ext() -> Option<String> {
    std::env::var("PYJOB_SCRIPT_EXT")
        .ok()
        .filter(|s| !s.is_empty())
}
