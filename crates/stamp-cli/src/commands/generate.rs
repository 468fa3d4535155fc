//! Implementation of the default `stamp` action.
//!
//! Responsibility: turn flags and config into a [`GenerationRequest`], run
//! the core service, and display the report. No business logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument};

use stamp_core::{
    application::GenerationRequest,
    domain::{
        FailureStage, GenerationReport, InjectionValue, OutcomeStatus, OutputTarget,
        TEMPLATE_SUFFIX, TemplateOutcome,
    },
};

use crate::{
    cli::{GenerateArgs, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute a generation run.
///
/// Sequence:
/// 1. Validate the injected value (fatal if missing)
/// 2. Resolve directory and prefix from flags, then config
/// 3. Run the service (fatal only for bundle / directory failures)
/// 4. Display per-template lines and the summary
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(
    args: GenerateArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    // 1. Nothing may touch the filesystem before this check.
    let value = InjectionValue::new(args.string.unwrap_or_default())?;

    // 2. Resolve target
    let target = resolve_target(args.dir, args.prefix, config);
    debug!(
        dir = %target.dir().display(),
        prefix = target.prefix().as_str(),
        "Target resolved"
    );

    // 3. Run
    let service = super::build_service(global.templates.as_deref());
    let request = GenerationRequest::new(target, value).dry_run(args.dry_run);

    let report = service.run(&request)?;

    // 4. Display, only once the run got past the fatal checks.
    match output.format() {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonReport::from(&report))?;
            output.json(&json)?;
        }
        _ => {
            output.header(&format!(
                "Generating files in directory: '{}'",
                request.target.dir().display()
            ))?;
            display_report(&report, output)?;
        }
    }

    Ok(())
}

/// Flag beats config; config beats the built-in default.
fn resolve_target(
    dir: Option<PathBuf>,
    prefix: Option<String>,
    config: &AppConfig,
) -> OutputTarget {
    let dir = dir
        .or_else(|| config.defaults.dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let prefix = prefix
        .or_else(|| config.defaults.prefix.clone())
        .unwrap_or_default();
    OutputTarget::new(dir, prefix)
}

// ── Human / plain output ─────────────────────────────────────────────────────

fn display_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    for outcome in &report.outcomes {
        display_outcome(outcome, output)?;
    }

    for path in &report.collisions {
        output.warning(&format!(
            "'{}' was produced by more than one template; the last one wins",
            path.display()
        ))?;
    }

    if report.dry_run {
        let planned = report.planned_count();
        if planned == 0 {
            output.info(&nothing_generated())?;
        } else {
            output.info(&format!("Dry run. Would generate {planned} file(s)."))?;
        }
        return Ok(());
    }

    match report.generated_count() {
        0 => output.info(&nothing_generated())?,
        n => output.success(&format!("Done. Successfully generated {n} file(s)."))?,
    }

    Ok(())
}

fn display_outcome(outcome: &TemplateOutcome, output: &OutputManager) -> CliResult<()> {
    let path = outcome
        .output
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    match &outcome.status {
        OutcomeStatus::Written => output.print(&format!("  Created {path}"))?,
        OutcomeStatus::Planned => output.print(&format!("  Would create {path}"))?,
        OutcomeStatus::Failed(failure) => match failure.stage {
            // The file exists but may hold partial content.
            FailureStage::Render => output.warning(&format!(
                "{} (partial output left at {path})",
                failure.message
            ))?,
            _ => output.warning(&format!("Skipping: {}", failure.message))?,
        },
    }

    Ok(())
}

fn nothing_generated() -> String {
    format!("No valid '{TEMPLATE_SUFFIX}' templates found. Nothing was generated.")
}

// ── JSON output ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a GenerationReport,
    generated: usize,
}

impl<'a> From<&'a GenerationReport> for JsonReport<'a> {
    fn from(report: &'a GenerationReport) -> Self {
        Self {
            report,
            generated: report.generated_count(),
        }
    }
}
