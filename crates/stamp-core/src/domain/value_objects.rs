//! Domain value objects: InjectionValue, FilenamePrefix, OutputTarget.
//!
//! These are pure value types with equality-by-value and no identity.
//! Validation happens at construction so an existing value is always valid.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{error::DomainError, template::TemplateName};

// ── InjectionValue ───────────────────────────────────────────────────────────

/// The single opaque string substituted into every template.
///
/// Invariant: never empty. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionValue(String);

impl InjectionValue {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::MissingInput { field: "-s" });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InjectionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── FilenamePrefix ───────────────────────────────────────────────────────────

/// Prepended verbatim to every output file name. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilenamePrefix(String);

impl FilenamePrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── OutputTarget ─────────────────────────────────────────────────────────────

/// Where rendered files go and how they are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    dir: PathBuf,
    prefix: FilenamePrefix,
}

impl OutputTarget {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: FilenamePrefix::new(prefix),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn prefix(&self) -> &FilenamePrefix {
        &self.prefix
    }

    /// `prefix + stem(name)`.
    pub fn file_name(&self, name: &TemplateName) -> String {
        format!("{}{}", self.prefix.as_str(), name.stem())
    }

    /// `dir / (prefix + stem(name))`.
    pub fn output_path(&self, name: &TemplateName) -> PathBuf {
        self.dir.join(self.file_name(name))
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self::new(".", "")
    }
}
