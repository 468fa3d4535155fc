//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stamp-adapters` crate provides implementations.

use std::io::Write;
use std::path::Path;

use crate::domain::{BundleEntry, InjectionValue, Template};
use crate::error::StampResult;

/// Port for template bundle enumeration.
///
/// Implemented by:
/// - `stamp_adapters::store::EmbeddedStore` (bundle compiled into the binary)
/// - `stamp_adapters::store::DirectoryStore` (templates on disk)
/// - `stamp_adapters::store::InMemoryStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Human-readable name of where templates come from, for messages.
    fn describe(&self) -> String;

    /// All top-level entries, sorted by name.
    ///
    /// An `Err` means the bundle itself is unreadable, which is fatal.
    /// Entries that merely fail to read come back as
    /// [`BundleEntry::Unreadable`].
    fn entries(&self) -> StampResult<Vec<BundleEntry>>;
}

/// A template that parsed successfully and can be rendered any number of
/// times.
pub trait PreparedTemplate {
    /// Render with `value`, streaming into `out`.
    ///
    /// Output written before a failure stays in `out`.
    fn render_to(&self, value: &InjectionValue, out: &mut dyn Write) -> StampResult<()>;
}

/// Port for template parsing.
///
/// Implemented by:
/// - `stamp_adapters::renderer::GoTemplateRenderer` (Go text/template via gtmpl)
pub trait TemplateRenderer: Send + Sync {
    /// Parse `template`. Syntax errors surface here, not at render time.
    fn prepare(&self, template: &Template) -> StampResult<Box<dyn PreparedTemplate>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stamp_adapters::filesystem::LocalFilesystem` (production)
/// - `stamp_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StampResult<()>;

    /// Create or truncate a file and hand back a writer for it.
    ///
    /// The file is closed when the writer is dropped.
    fn create_file(&self, path: &Path) -> StampResult<Box<dyn Write>>;
}
