// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted job output: one file per detached job, keyed by id
//!
//! The store owns no state beyond a directory path. Detached jobs write
//! `{id}.{out_ext}` via shell redirection and `{id}.status` once the
//! interpreter exits; the store reads, deletes, and age-prunes those files.
//! Concurrent access is coordinated only by the host filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};

use pyjob_core::{Clock, JobId, SystemClock};

use crate::error::StoreError;

/// Extension of the exit-code sidecar written by the detachment wrapper.
pub const STATUS_EXT: &str = "status";

/// Path of the output file for a job.
pub fn output_file(dir: &Path, id: &JobId, out_ext: &str) -> PathBuf {
    dir.join(format!("{id}.{out_ext}"))
}

/// Path of the exit-code sidecar for a job.
pub fn status_file(dir: &Path, id: &JobId) -> PathBuf {
    dir.join(format!("{id}.{STATUS_EXT}"))
}

/// Completion state of a detached job, as far as the store can tell.
///
/// The store cannot observe the process itself; it only sees what the
/// detachment wrapper left on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    /// Output file exists but no exit code has been recorded yet
    Running,
    /// The wrapper recorded the interpreter's exit code
    Finished(i32),
}

pyjob_core::simple_display! {
    JobStatus {
        Running => "running",
        Finished(..) => "finished",
    }
}

/// Directory of output files keyed by job id.
///
/// Generic over [`Clock`] so retention ages are deterministic in tests.
#[derive(Clone)]
pub struct ResultStore<C: Clock = SystemClock> {
    dir: PathBuf,
    out_ext: String,
    clock: C,
}

impl ResultStore<SystemClock> {
    pub fn new(dir: impl Into<PathBuf>, out_ext: impl Into<String>) -> Self {
        Self::with_clock(dir, out_ext, SystemClock)
    }
}

impl<C: Clock> ResultStore<C> {
    pub fn with_clock(dir: impl Into<PathBuf>, out_ext: impl Into<String>, clock: C) -> Self {
        Self {
            dir: dir.into(),
            out_ext: out_ext.into(),
            clock,
        }
    }

    /// Directory the store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the output file for a job.
    pub fn output_path(&self, id: &JobId) -> PathBuf {
        output_file(&self.dir, id, &self.out_ext)
    }

    /// Path of the exit-code sidecar for a job.
    pub fn status_path(&self, id: &JobId) -> PathBuf {
        status_file(&self.dir, id)
    }

    /// Full current contents of a job's output file.
    ///
    /// A job that is still running reads as empty or partial content; a job
    /// that never existed and one whose output was pruned both read as
    /// [`StoreError::NotFound`]. Bytes that are not valid UTF-8 (the child's
    /// encoding is configurable) are replaced rather than rejected.
    pub fn get(&self, id: &JobId) -> Result<String, StoreError> {
        match fs::read(self.output_path(id)) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound { id: id.clone() })
            }
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    /// Completion state of a job.
    ///
    /// [`StoreError::NotFound`] when there is no output file at all. A
    /// sidecar that exists but does not parse as an exit code yet (the
    /// wrapper may be mid-write) reads as [`JobStatus::Running`].
    pub fn status(&self, id: &JobId) -> Result<JobStatus, StoreError> {
        if !self.output_path(id).is_file() {
            return Err(StoreError::NotFound { id: id.clone() });
        }
        match fs::read_to_string(self.status_path(id)) {
            Ok(contents) => Ok(contents
                .trim()
                .parse::<i32>()
                .map(JobStatus::Finished)
                .unwrap_or(JobStatus::Running)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(JobStatus::Running),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    /// Remove one job's output file and sidecar.
    pub fn delete(&self, id: &JobId) -> Result<(), StoreError> {
        match fs::remove_file(self.output_path(id)) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound { id: id.clone() })
            }
            Err(err) => return Err(StoreError::Io(err)),
        }
        match fs::remove_file(self.status_path(id)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    /// Remove output files whose modification time is older than
    /// `now - max_age`; returns how many were removed.
    ///
    /// `max_age` of zero removes every output file. Files without the output
    /// extension are untouched; each pruned job's sidecar goes with it but is
    /// not counted. An individual removal failure does not abort the scan —
    /// remaining files are still processed and the call ends with
    /// [`StoreError::PruneIncomplete`] so failures are never silent.
    ///
    /// The cutoff comparison is inclusive so `prune(0)` removes files created
    /// in the same clock instant even on coarse-mtime filesystems.
    pub fn prune(&self, max_age: Duration) -> Result<usize, StoreError> {
        let cutoff_ms = self
            .clock
            .epoch_ms()
            .saturating_sub(max_age.as_millis() as u64);

        let mut removed = 0usize;
        let mut failed = 0usize;
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(self.out_ext.as_str()) {
                continue;
            }
            let Some(mtime_ms) = modified_epoch_ms(&path) else {
                // Raced with deletion, or metadata unreadable; either way the
                // file cannot be aged.
                failed += 1;
                continue;
            };
            if mtime_ms > cutoff_ms {
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => {
                    removed += 1;
                    remove_sidecar(&path);
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    // Another prune got here first; nothing left to count.
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to remove output file during prune"
                    );
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            Err(StoreError::PruneIncomplete { removed, failed })
        } else {
            Ok(removed)
        }
    }
}

fn modified_epoch_ms(path: &Path) -> Option<u64> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    let since_epoch = modified.duration_since(UNIX_EPOCH).ok()?;
    Some(since_epoch.as_millis() as u64)
}

fn remove_sidecar(output_path: &Path) {
    let sidecar = output_path.with_extension(STATUS_EXT);
    if let Err(err) = fs::remove_file(&sidecar) {
        if err.kind() != io::ErrorKind::NotFound {
            tracing::warn!(
                path = %sidecar.display(),
                error = %err,
                "failed to remove status sidecar during prune"
            );
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
