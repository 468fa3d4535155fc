//! Templates and the entries a template bundle is made of.
//!
//! A bundle is enumerated as a flat list of [`BundleEntry`] values. Only
//! files whose name ends in [`TEMPLATE_SUFFIX`] are templates; everything
//! else (directories, stray assets) is skipped by the generator.

use std::fmt;

use crate::domain::error::DomainError;

/// Suffix every template file name carries. Stripped to form the output name.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

// ── TemplateName ─────────────────────────────────────────────────────────────

/// The file name of a bundle entry, e.g. `logo.svg.tmpl`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateName(String);

impl TemplateName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` if the name ends in [`TEMPLATE_SUFFIX`] and has something
    /// in front of it.
    pub fn is_template(&self) -> bool {
        self.0
            .strip_suffix(TEMPLATE_SUFFIX)
            .is_some_and(|stem| !stem.is_empty())
    }

    /// The name with one trailing [`TEMPLATE_SUFFIX`] removed.
    ///
    /// Names without the suffix are returned unchanged.
    pub fn stem(&self) -> &str {
        self.0.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ── Template ─────────────────────────────────────────────────────────────────

/// A named template body. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: TemplateName,
    body: String,
}

impl Template {
    /// Build a template, rejecting names that are not template files.
    pub fn new(name: TemplateName, body: impl Into<String>) -> Result<Self, DomainError> {
        if !name.is_template() {
            return Err(DomainError::NotATemplate {
                name: name.to_string(),
                suffix: TEMPLATE_SUFFIX,
            });
        }
        Ok(Self {
            name,
            body: body.into(),
        })
    }

    pub fn name(&self) -> &TemplateName {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

// ── BundleEntry ──────────────────────────────────────────────────────────────

/// One top-level entry of a template bundle, as enumerated by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleEntry {
    /// A sub-directory. Never processed.
    Directory { name: String },
    /// A file and its raw contents.
    File { name: TemplateName, contents: Vec<u8> },
    /// A file that was listed but whose contents could not be read.
    Unreadable { name: TemplateName, reason: String },
}

impl BundleEntry {
    pub fn file(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self::File {
            name: TemplateName::new(name),
            contents: contents.into(),
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self::Directory { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name } => name,
            Self::File { name, .. } | Self::Unreadable { name, .. } => name.as_str(),
        }
    }

    /// `true` for file entries (readable or not) carrying the template suffix.
    pub fn is_template(&self) -> bool {
        match self {
            Self::Directory { .. } => false,
            Self::File { name, .. } | Self::Unreadable { name, .. } => name.is_template(),
        }
    }
}
