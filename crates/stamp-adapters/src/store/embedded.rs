//! The template bundle compiled into the binary.
//!
//! Everything under `stamp-adapters/templates/` is embedded at build time.
//! Only top-level entries are enumerated; sub-directories show up as
//! [`BundleEntry::Directory`] and are skipped by the generator.

use include_dir::{Dir, DirEntry, include_dir};
use stamp_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::BundleEntry,
    error::StampResult,
};

static BUNDLE: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Read-only store over an embedded directory.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedStore {
    dir: &'static Dir<'static>,
}

impl EmbeddedStore {
    /// The bundle shipped with Stamp.
    pub fn new() -> Self {
        Self { dir: &BUNDLE }
    }
}

impl Default for EmbeddedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for EmbeddedStore {
    fn describe(&self) -> String {
        "built-in templates".into()
    }

    fn entries(&self) -> StampResult<Vec<BundleEntry>> {
        let mut entries = Vec::with_capacity(self.dir.entries().len());

        for entry in self.dir.entries() {
            let name = entry
                .path()
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| ApplicationError::BundleUnreadable {
                    source_name: self.describe(),
                    reason: format!("entry without a valid name: {}", entry.path().display()),
                })?
                .to_owned();

            entries.push(match entry {
                DirEntry::Dir(_) => BundleEntry::directory(name),
                DirEntry::File(file) => BundleEntry::file(name, file.contents()),
            });
        }

        entries.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(entries)
    }
}
