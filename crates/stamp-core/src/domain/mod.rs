//! Core domain layer for Stamp.
//!
//! This module contains pure logic with no I/O. Template enumeration,
//! rendering and writing are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Contents
//!
//! - **Templates**: [`TemplateName`], [`Template`], [`BundleEntry`]
//! - **Run inputs**: [`InjectionValue`], [`FilenamePrefix`], [`OutputTarget`]
//! - **Run outputs**: [`GenerationReport`] and its per-template outcomes

pub mod error;
pub mod report;
pub mod template;
pub mod value_objects;

pub use error::DomainError;
pub use report::{FailureStage, GenerationReport, ItemFailure, OutcomeStatus, TemplateOutcome};
pub use template::{BundleEntry, TEMPLATE_SUFFIX, Template, TemplateName};
pub use value_objects::{FilenamePrefix, InjectionValue, OutputTarget};
