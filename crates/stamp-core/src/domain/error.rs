// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports and logs keep copies)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Required value missing: {field}")]
    MissingInput { field: &'static str },

    #[error("'{name}' is not a template file (expected a name ending in '{suffix}')")]
    NotATemplate { name: String, suffix: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingInput { field } => vec![
                format!("Provide a non-empty value for {}", field),
                "Example: stamp -s \"hello\" -dir out -prefix app_".into(),
            ],
            Self::NotATemplate { suffix, .. } => {
                vec![format!("Template files must end in '{}'", suffix)]
            }
        }
    }
}
