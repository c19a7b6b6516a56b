//! Shared spec harness: temp project layout + binary invocation helpers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

pub use std::time::Duration;

/// Env vars the harness controls; cleared from every invocation so ambient
/// configuration cannot leak into specs.
const PYJOB_ENV: &[&str] = &[
    "PYJOB_SCRIPT_DIR",
    "PYJOB_OUTPUT_DIR",
    "PYJOB_INTERPRETER",
    "PYJOB_PYTHON",
    "PYJOB_SCRIPT_EXT",
];

/// A bare `pyjob` invocation with no project configured.
pub fn cli() -> SpecCmd {
    SpecCmd::new()
}

/// Temp script + output directories for one spec.
pub struct Project {
    root: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let root = tempfile::tempdir().expect("create temp project");
        std::fs::create_dir(root.path().join("scripts")).expect("create scripts dir");
        std::fs::create_dir(root.path().join("outputs")).expect("create outputs dir");
        Self { root }
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.root.path().join("scripts")
    }

    pub fn outputs_dir(&self) -> PathBuf {
        self.root.path().join("outputs")
    }

    /// Write a script into the scripts directory.
    pub fn script(&self, name: &str, body: &str) {
        std::fs::write(self.scripts_dir().join(name), body).expect("write script");
    }

    /// List filenames currently in the outputs directory.
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.outputs_dir())
            .expect("read outputs dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// A `pyjob` invocation preconfigured for this project, using `sh` as
    /// the interpreter so specs run without a Python install.
    pub fn pyjob(&self) -> SpecCmd {
        cli()
            .env("PYJOB_SCRIPT_DIR", self.scripts_dir())
            .env("PYJOB_OUTPUT_DIR", self.outputs_dir())
            .env("PYJOB_INTERPRETER", "sh")
            .env("PYJOB_SCRIPT_EXT", "sh")
    }

    /// Poll `pyjob status` until the job reports finished.
    pub fn wait_for_finish(&self, id: &str) {
        for _ in 0..100 {
            let out = self.pyjob().args(&["status", id]).run();
            if out.status.success() && stdout_of(&out).starts_with("finished") {
                return;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        panic!("detached job {id} did not finish in time");
    }
}

/// Builder around the compiled `pyjob` binary.
pub struct SpecCmd {
    cmd: assert_cmd::Command,
}

impl SpecCmd {
    fn new() -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("pyjob").expect("pyjob binary");
        for var in PYJOB_ENV {
            cmd.env_remove(var);
        }
        Self { cmd }
    }

    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.cmd.env(key, value.as_ref());
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    fn run(mut self) -> Output {
        self.cmd.output().expect("run pyjob")
    }

    /// Run and require a zero exit.
    pub fn passes(self) -> SpecOutput {
        let output = self.run();
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        SpecOutput { output }
    }

    /// Run and require a nonzero exit.
    pub fn fails(self) -> SpecOutput {
        let output = self.run();
        assert!(
            !output.status.success(),
            "expected failure, got success\nstdout: {}",
            String::from_utf8_lossy(&output.stdout),
        );
        SpecOutput { output }
    }

    /// Run and require a specific exit code.
    pub fn exits_with(self, code: i32) -> SpecOutput {
        let output = self.run();
        assert_eq!(
            output.status.code(),
            Some(code),
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        SpecOutput { output }
    }
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Captured output with chainable content assertions.
pub struct SpecOutput {
    output: Output,
}

impl SpecOutput {
    pub fn stdout(&self) -> String {
        stdout_of(&self.output)
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout().contains(needle),
            "stdout missing {needle:?}\nstdout: {}",
            self.stdout(),
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr().contains(needle),
            "stderr missing {needle:?}\nstderr: {}",
            self.stderr(),
        );
        self
    }
}
