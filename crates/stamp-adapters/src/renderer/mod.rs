//! Template renderers.

mod go_template;

pub use go_template::GoTemplateRenderer;
