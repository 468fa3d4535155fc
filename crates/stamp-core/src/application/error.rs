//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not input
//! validation. Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
///
/// The fatal variants abort a run. The per-template variants
/// (`TemplateParse`, `RenderingFailed`, `FilesystemError`) are returned by
/// ports and turned into report entries by the generator.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The template bundle could not be enumerated.
    #[error("Could not read template bundle '{source_name}': {reason}")]
    BundleUnreadable { source_name: String, reason: String },

    /// The output directory could not be created.
    #[error("Could not create target directory '{path}': {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    /// The engine rejected a template's source.
    #[error("Could not parse template '{template}': {reason}")]
    TemplateParse { template: String, reason: String },

    /// Template rendering failed.
    #[error("Failed to execute template '{template}': {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::BundleUnreadable { source_name, .. } => vec![
                format!("Template source: {}", source_name),
                "If this is the built-in bundle, the binary is corrupt; reinstall it".into(),
                "If you passed --templates, check that the directory exists and is readable"
                    .into(),
            ],
            Self::DirectoryCreation { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that you have write permission on the parent directory".into(),
                "Choose a different directory with -dir".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BundleUnreadable { .. } => ErrorCategory::NotFound,
            Self::DirectoryCreation { .. } | Self::FilesystemError { .. } => {
                ErrorCategory::Internal
            }
            Self::TemplateParse { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
