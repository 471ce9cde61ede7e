use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Separator token must not be empty")]
    EmptySeparator,

    #[error("Segment {segment} has a marker line with an empty path")]
    EmptyMarkerPath { segment: usize },

    #[error("Marker paths must be relative: {path}")]
    AbsoluteMarkerPath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptySeparator => vec![
                "Set a non-empty marker token in your configuration".into(),
                "The default is `-- File: `".into(),
            ],
            Self::EmptyMarkerPath { segment } => vec![
                format!("Marker {} names no file", segment),
                "Every marker line needs a relative path after the token, e.g. `-- File: tables/orders.sql`".into(),
            ],
            Self::AbsoluteMarkerPath { path } => vec![
                format!("Marker path '{}' is absolute", path),
                "Markers are resolved under the schema folder and must stay relative".into(),
                "Use `../` at most once to reach one level above the schema folder".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptySeparator | Self::EmptyMarkerPath { .. } | Self::AbsoluteMarkerPath { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
