//! Generate Service - main application orchestrator.
//!
//! This service runs the whole generation pass:
//! 1. Enumerate the template bundle
//! 2. Ensure the target directory exists
//! 3. For every template: parse, create the output file, render into it
//!
//! Steps 1 and 2 are fatal on failure. Every step of 3 is scoped to one
//! template and is recorded in the [`GenerationReport`] instead.

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    },
    domain::{
        BundleEntry, FailureStage, GenerationReport, InjectionValue, ItemFailure, OutcomeStatus,
        OutputTarget, Template, TemplateName, TemplateOutcome,
    },
    error::{StampError, StampResult},
};

/// Everything a single run needs.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub target: OutputTarget,
    pub value: InjectionValue,
    /// Parse and plan, but create nothing on disk.
    pub dry_run: bool,
}

impl GenerationRequest {
    pub fn new(target: OutputTarget, value: InjectionValue) -> Self {
        Self {
            target,
            value,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateListing {
    pub template: String,
    pub output_file: String,
}

/// Main generation service.
pub struct GenerateService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Render every template in the store into the request's target.
    ///
    /// Returns `Err` only for fatal conditions: unreadable bundle or a
    /// target directory that cannot be created.
    #[instrument(
        skip_all,
        fields(
            target_dir = %request.target.dir().display(),
            dry_run = request.dry_run
        )
    )]
    pub fn run(&self, request: &GenerationRequest) -> StampResult<GenerationReport> {
        let entries = self.store.entries()?;
        debug!(
            source = %self.store.describe(),
            entries = entries.len(),
            "Bundle enumerated"
        );

        let dir = request.target.dir();
        if !request.dry_run {
            self.filesystem
                .create_dir_all(dir)
                .map_err(|e| directory_creation_error(dir.to_path_buf(), e))?;
        }

        let mut report = GenerationReport::new(dir, request.dry_run);
        let mut seen: HashSet<PathBuf> = HashSet::new();

        for entry in entries {
            let outcome = match entry {
                BundleEntry::File { name, contents } if name.is_template() => {
                    self.process(name, contents, request, &mut seen, &mut report.collisions)
                }
                BundleEntry::Unreadable { name, reason } if name.is_template() => {
                    let message = format!("Could not read template '{}': {}", name, reason);
                    failed(&name, None, FailureStage::Read, message)
                }
                other => {
                    debug!(entry = other.name(), "Skipping non-template entry");
                    continue;
                }
            };
            match &outcome.status {
                OutcomeStatus::Written => {
                    info!(template = %outcome.template, path = ?outcome.output, "Created");
                }
                OutcomeStatus::Planned => {
                    info!(template = %outcome.template, path = ?outcome.output, "Planned");
                }
                OutcomeStatus::Failed(failure) => {
                    warn!(
                        template = %outcome.template,
                        stage = %failure.stage,
                        "{}",
                        failure.message
                    );
                }
            }
            report.push(outcome);
        }

        info!(
            generated = report.generated_count(),
            planned = report.planned_count(),
            failed = report.failures().count(),
            "Generation finished"
        );
        Ok(report)
    }

    /// List the templates in the store and the file each would produce.
    pub fn list(&self, target: &OutputTarget) -> StampResult<Vec<TemplateListing>> {
        let entries = self.store.entries()?;

        Ok(entries
            .into_iter()
            .filter(BundleEntry::is_template)
            .map(|entry| {
                let name = TemplateName::new(entry.name());
                TemplateListing {
                    template: name.to_string(),
                    output_file: target.file_name(&name),
                }
            })
            .collect())
    }

    /// Description of the template source, for messages.
    pub fn source(&self) -> String {
        self.store.describe()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Run one template file through decode → parse → create → render.
    fn process(
        &self,
        name: TemplateName,
        contents: Vec<u8>,
        request: &GenerationRequest,
        seen: &mut HashSet<PathBuf>,
        collisions: &mut Vec<PathBuf>,
    ) -> TemplateOutcome {
        let body = match String::from_utf8(contents) {
            Ok(body) => body,
            Err(e) => {
                let message = format!("Could not read template '{}': {}", name, e);
                return failed(&name, None, FailureStage::Read, message);
            }
        };

        let template = match Template::new(name.clone(), body) {
            Ok(template) => template,
            Err(e) => return failed(&name, None, FailureStage::Read, e.to_string()),
        };

        let prepared = match self.renderer.prepare(&template) {
            Ok(prepared) => prepared,
            Err(e) => return failed(&name, None, FailureStage::Parse, e.to_string()),
        };

        let path = request.target.output_path(&name);
        if !seen.insert(path.clone()) {
            warn!(
                template = %name,
                path = %path.display(),
                "Output path already produced in this run; overwriting"
            );
            collisions.push(path.clone());
        }

        if request.dry_run {
            return TemplateOutcome {
                template: name.to_string(),
                output: Some(path),
                status: OutcomeStatus::Planned,
            };
        }

        let mut file = match self.filesystem.create_file(&path) {
            Ok(file) => file,
            Err(e) => return failed(&name, Some(path), FailureStage::Create, e.to_string()),
        };

        // `file` is dropped (and closed) on every path out of this function.
        let rendered = prepared
            .render_to(&request.value, &mut *file)
            .and_then(|()| {
                file.flush().map_err(|e| {
                    StampError::from(ApplicationError::RenderingFailed {
                        template: name.to_string(),
                        reason: format!("flush failed: {}", e),
                    })
                })
            });

        match rendered {
            Ok(()) => TemplateOutcome {
                template: name.to_string(),
                output: Some(path),
                status: OutcomeStatus::Written,
            },
            Err(e) => failed(&name, Some(path), FailureStage::Render, e.to_string()),
        }
    }
}

fn failed(
    name: &TemplateName,
    output: Option<PathBuf>,
    stage: FailureStage,
    message: impl Into<String>,
) -> TemplateOutcome {
    TemplateOutcome {
        template: name.to_string(),
        output,
        status: OutcomeStatus::Failed(ItemFailure::new(stage, message)),
    }
}

fn directory_creation_error(path: PathBuf, err: StampError) -> StampError {
    let reason = match err {
        StampError::Application(ApplicationError::FilesystemError { reason, .. }) => reason,
        other => other.to_string(),
    };
    ApplicationError::DirectoryCreation { path, reason }.into()
}
