use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Parent-escape prefix on a marker path.
///
/// A marker beginning with this sequence resolves one directory above the
/// resolution root instead of directly under it; this covers projects whose
/// split files live next to the schema folder rather than inside it.
pub const PARENT_ESCAPE: &str = "../";

/// The relative file path named by a segment's marker line.
///
/// The raw line is kept verbatim (escape prefix included) so the composite
/// document can be rewritten without altering what the author wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPath {
    raw: String,
    relative: String,
    parent_escape: bool,
}

impl MarkerPath {
    /// Parse a marker line into a path.
    ///
    /// `segment` is the 1-based segment index, used only for error reporting.
    pub fn parse(line: &str, segment: usize) -> Result<Self, DomainError> {
        let raw = line.to_string();
        let (parent_escape, relative) = match raw.strip_prefix(PARENT_ESCAPE) {
            Some(rest) => (true, rest.to_string()),
            None => (false, raw.clone()),
        };

        if relative.trim().is_empty() {
            return Err(DomainError::EmptyMarkerPath { segment });
        }
        if Path::new(&relative).is_absolute() {
            return Err(DomainError::AbsoluteMarkerPath { path: raw });
        }

        Ok(Self {
            raw,
            relative,
            parent_escape,
        })
    }

    /// Absolute target path under (or above) the resolution root.
    ///
    /// Escaped markers resolve against the parent of the root; everything
    /// else resolves directly under the root.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        if self.parent_escape {
            match root.parent() {
                Some(parent) => parent.join(&self.relative),
                None => root.join(&self.relative),
            }
        } else {
            root.join(&self.relative)
        }
    }

    /// The marker line exactly as written, escape prefix included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The relative path with any escape prefix stripped.
    pub fn relative(&self) -> &str {
        &self.relative
    }

    pub fn is_parent_escaped(&self) -> bool {
        self.parent_escape
    }
}

impl fmt::Display for MarkerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
