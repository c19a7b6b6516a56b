// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identifier generation

/// Unique identifier for one detached execution.
///
/// Issued when a script is launched detached; remains the lookup key for the
/// job's persisted output until that file is pruned or deleted.
///
/// The format is `job-{nanoid}` where the nanoid is 19 random characters,
/// making same-instant collisions negligible under concurrent launches.
/// Total length is 23 characters, which exactly fits `SmolStr` inline capacity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct JobId(pub smol_str::SmolStr);

impl JobId {
    pub const PREFIX: &'static str = "job-";

    /// Generate a new random ID with the type prefix
    pub fn new() -> Self {
        Self(smol_str::SmolStr::new(&format!(
            "{}{}",
            Self::PREFIX,
            nanoid::nanoid!(19)
        )))
    }

    /// Create ID from existing string (for parsing/deserialization)
    pub fn from_string(id: impl Into<smol_str::SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the ID suffix (without prefix)
    pub fn suffix(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Returns true if the ID is an empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for JobId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for JobId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::borrow::Borrow<str> for JobId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
