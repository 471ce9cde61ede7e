//! Value objects of the splice domain: line endings and the marker token.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Line-termination convention of a composite document.
///
/// Detection inspects the first line only: a carriage return before the first
/// line feed marks the whole document as CRLF. The detected style is applied
/// uniformly to every write derived from the document; there is no per-line
/// mixed-ending handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detect the convention used by `text`.
    pub fn detect(text: &str) -> Self {
        let first_line = text.split('\n').next().unwrap_or(text);
        if first_line.contains('\r') {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    /// The literal terminator to emit.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lf => write!(f, "lf"),
            Self::CrLf => write!(f, "crlf"),
        }
    }
}

/// The configurable token that introduces each marker line, e.g. `-- File: `.
///
/// The token is a configuration value; the engine never hard-codes the
/// literal text. Invariant: never empty, enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator(String);

impl Separator {
    pub fn new(token: impl Into<String>) -> Result<Self, DomainError> {
        let token = token.into();
        if token.is_empty() {
            return Err(DomainError::EmptySeparator);
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
