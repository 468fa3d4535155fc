//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stamp-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateStore`: Template bundle enumeration
//!   - `TemplateRenderer` / `PreparedTemplate`: Parsing and rendering
//!   - `Filesystem`: Directory and file creation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, PreparedTemplate, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::MockTemplateStore;
