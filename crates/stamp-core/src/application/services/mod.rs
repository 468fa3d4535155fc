//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "render every template into a directory".

pub mod generate_service;

pub use generate_service::{GenerateService, GenerationRequest, TemplateListing};
