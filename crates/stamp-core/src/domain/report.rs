//! The result of one generation run.
//!
//! Every template the generator attempts gets exactly one
//! [`TemplateOutcome`]. Failures are values here, never propagated errors:
//! one template failing does not stop the others.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Step of the per-template pipeline at which a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    /// Body could not be read or is not UTF-8.
    Read,
    /// Engine rejected the template source.
    Parse,
    /// Output file could not be created.
    Create,
    /// Engine failed while writing into the output file.
    Render,
}

impl FailureStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Parse => "parse",
            Self::Create => "create",
            Self::Render => "render",
        }
    }
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure scoped to a single template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFailure {
    pub stage: FailureStage,
    pub message: String,
}

impl ItemFailure {
    pub fn new(stage: FailureStage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }
}

impl fmt::Display for ItemFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.stage, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// The file was written completely.
    Written,
    /// Dry run: the file would have been written.
    Planned,
    Failed(ItemFailure),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateOutcome {
    pub template: String,
    /// `None` when the failure happened before the path was computed.
    pub output: Option<PathBuf>,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl TemplateOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self.status, OutcomeStatus::Written)
    }

    pub fn failure(&self) -> Option<&ItemFailure> {
        match &self.status {
            OutcomeStatus::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Ordered outcomes of a run plus any output paths hit more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub target_dir: PathBuf,
    pub dry_run: bool,
    pub outcomes: Vec<TemplateOutcome>,
    pub collisions: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn new(target_dir: impl AsRef<Path>, dry_run: bool) -> Self {
        Self {
            target_dir: target_dir.as_ref().to_path_buf(),
            dry_run,
            ..Self::default()
        }
    }

    pub fn push(&mut self, outcome: TemplateOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of files fully written.
    pub fn generated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_written()).count()
    }

    /// Number of files a dry run would have written.
    pub fn planned_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Planned))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &TemplateOutcome> {
        self.outcomes.iter().filter(|o| o.failure().is_some())
    }

    /// Paths of every file written, in order.
    pub fn written_paths(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|o| o.is_written())
            .filter_map(|o| o.output.as_deref())
    }
}
