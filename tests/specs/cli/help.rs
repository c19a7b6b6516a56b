//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn pyjob_no_args_shows_usage() {
    cli().fails().stderr_has("Usage:");
}

#[test]
fn pyjob_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("run")
        .stdout_has("result")
        .stdout_has("status")
        .stdout_has("prune");
}

#[test]
fn pyjob_run_help_shows_usage() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--detach");
}

#[test]
fn pyjob_prune_help_shows_max_age() {
    cli()
        .args(&["prune", "--help"])
        .passes()
        .stdout_has("--max-age-secs");
}

#[test]
fn pyjob_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}
