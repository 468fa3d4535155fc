//! Go `text/template` renderer.
//!
//! The injected value is the template's dot: `{{.}}` prints it. Output is
//! never escaped, so markup in the value reaches the file unchanged.

use std::io::Write;

use gtmpl::{Context, Template as GoTemplate};
use stamp_core::{
    application::{
        ApplicationError,
        ports::{PreparedTemplate, TemplateRenderer},
    },
    domain::{InjectionValue, Template},
    error::StampResult,
};
use tracing::instrument;

/// Renderer that parses each template once and executes it per value.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTemplateRenderer;

impl GoTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for GoTemplateRenderer {
    #[instrument(skip_all, fields(template = %template.name()))]
    fn prepare(&self, template: &Template) -> StampResult<Box<dyn PreparedTemplate>> {
        let name = template.name().to_string();

        let mut parsed = GoTemplate::default();
        parsed
            .parse(template.body())
            .map_err(|err| ApplicationError::TemplateParse {
                template: name.clone(),
                reason: err.to_string(),
            })?;

        Ok(Box::new(ParsedTemplate { parsed, name }))
    }
}

struct ParsedTemplate {
    parsed: GoTemplate,
    name: String,
}

impl PreparedTemplate for ParsedTemplate {
    fn render_to(&self, value: &InjectionValue, mut out: &mut dyn Write) -> StampResult<()> {
        let context = Context::from(value.as_str().to_owned());

        // Streams into `out`; whatever was written before a failure stays.
        self.parsed
            .execute(&mut out, &context)
            .map_err(|err| ApplicationError::RenderingFailed {
                template: self.name.clone(),
                reason: err.to_string(),
            })?;
        Ok(())
    }
}
