//! Application layer for Stamp.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; naming and validation
//! rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateService, GenerationRequest, TemplateListing};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PreparedTemplate, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
