//! Templates read from a directory on disk.
//!
//! Used with `--templates DIR` to swap the built-in bundle for a local one.
//! Like the embedded bundle, only the top level of the directory is read.

use std::path::PathBuf;

use stamp_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{BundleEntry, TemplateName},
    error::StampResult,
};
use tracing::{debug, instrument};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateStore for DirectoryStore {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    #[instrument(skip_all, fields(root = %self.root.display()))]
    fn entries(&self) -> StampResult<Vec<BundleEntry>> {
        if !self.root.is_dir() {
            return Err(ApplicationError::BundleUnreadable {
                source_name: self.describe(),
                reason: "not a readable directory".into(),
            }
            .into());
        }

        let mut entries = Vec::new();
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for walk_entry in walker {
            let walk_entry = walk_entry.map_err(|e| ApplicationError::BundleUnreadable {
                source_name: self.describe(),
                reason: e.to_string(),
            })?;
            let name = walk_entry.file_name().to_string_lossy().into_owned();

            if walk_entry.file_type().is_dir() {
                entries.push(BundleEntry::directory(name));
                continue;
            }

            let entry = match std::fs::read(walk_entry.path()) {
                Ok(contents) => BundleEntry::file(name, contents),
                Err(e) => {
                    debug!(path = %walk_entry.path().display(), error = %e, "Unreadable template");
                    BundleEntry::Unreadable {
                        name: TemplateName::new(name),
                        reason: e.to_string(),
                    }
                }
            };
            entries.push(entry);
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_top_level_entries_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("b.tmpl"), "B").unwrap();
        fs::write(tmp.path().join("a.tmpl"), "A").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/deep.tmpl"), "D").unwrap();

        let entries = DirectoryStore::new(tmp.path()).entries().unwrap();

        assert_eq!(
            entries,
            vec![
                BundleEntry::file("a.tmpl", "A"),
                BundleEntry::file("b.tmpl", "B"),
                BundleEntry::directory("sub"),
            ]
        );
    }

    #[test]
    fn missing_directory_is_unreadable_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let err = DirectoryStore::new(tmp.path().join("nope"))
            .entries()
            .unwrap_err();

        assert!(err.to_string().contains("Could not read template bundle"));
    }
}
