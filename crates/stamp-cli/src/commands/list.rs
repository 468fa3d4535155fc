//! Implementation of the `stamp list` command.

use stamp_core::domain::OutputTarget;

use crate::{
    cli::{GlobalArgs, ListArgs, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let service = super::build_service(global.templates.as_deref());
    let target = OutputTarget::new(".", args.prefix.unwrap_or_default());
    let templates = service.list(&target)?;

    match output.format() {
        OutputFormat::Json => {
            // Written even in quiet mode so pipes always get a document.
            let json = serde_json::to_string_pretty(&templates)?;
            output.json(&json)?;
        }
        _ => {
            if templates.is_empty() {
                output.info(&format!("No templates found in {}", service.source()))?;
                return Ok(());
            }

            output.header(&format!("Templates ({}):", service.source()))?;
            let width = templates
                .iter()
                .map(|t| t.template.len())
                .max()
                .unwrap_or(0);
            for listing in &templates {
                output.print(&format!(
                    "  {:<width$}  ->  {}",
                    listing.template, listing.output_file
                ))?;
            }
        }
    }

    Ok(())
}
