//! Stamp Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stamp
//! template generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            stamp-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Store, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     stamp-adapters (Infrastructure)     │
//! │ (EmbeddedStore, GoTemplateRenderer, ...)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TemplateName, InjectionValue, Report)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stamp_core::prelude::*;
//!
//! let request = GenerationRequest::new(
//!     OutputTarget::new("out", "app_"),
//!     InjectionValue::new("hello")?,
//! );
//! let service = GenerateService::new(store, renderer, filesystem);
//! let report = service.run(&request)?;
//! println!("{} file(s)", report.generated_count());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerationRequest,
        ports::{Filesystem, PreparedTemplate, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        BundleEntry, FailureStage, FilenamePrefix, GenerationReport, InjectionValue, ItemFailure,
        OutcomeStatus, OutputTarget, TEMPLATE_SUFFIX, Template, TemplateName, TemplateOutcome,
    };
    pub use crate::error::{StampError, StampResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
