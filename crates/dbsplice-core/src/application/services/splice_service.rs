//! Splice Service - split, join, and reverse-reference scan.
//!
//! This service owns the full read-modify-write cycle of exactly one
//! composite file per invocation:
//! 1. Read the composite document fresh from disk
//! 2. Tokenize it on the configured separator token
//! 3. Apply the operation through the filesystem port
//!
//! All operations are synchronous; external races on the same files are
//! last-write-wins with no detection.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{CompositeDocument, Separator, references},
    error::SpliceResult,
};

/// What a split, join, or scan did to the composite file.
///
/// A document without usable markers is a no-op, not a failure; the caller
/// decides how to word that for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The composite file was rewritten; the count is operation-specific
    /// (files written, segments joined, references appended).
    Changed(usize),
    /// Nothing to do; the composite file was left byte-identical.
    Unchanged,
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    pub fn count(&self) -> usize {
        match self {
            Self::Changed(n) => *n,
            Self::Unchanged => 0,
        }
    }
}

/// Main splice service.
///
/// Orchestrates tokenization and filesystem effects for the three
/// composite-file operations.
pub struct SpliceService {
    filesystem: Box<dyn Filesystem>,
}

impl SpliceService {
    /// Create a new splice service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Split a composite file into its referenced target files.
    ///
    /// Each segment's body is written to the path its marker resolves to
    /// under `root` (parent directories are created as needed); segments
    /// with blank bodies are skipped. When at least one file was written
    /// the source is rewritten to preamble + marker lines only.
    ///
    /// Any target write failure aborts the operation before the source is
    /// touched; already-written targets remain on disk.
    #[instrument(skip_all, fields(source = %source.display(), root = %root.display()))]
    pub fn split(
        &self,
        source: &Path,
        root: &Path,
        separator: &Separator,
    ) -> SpliceResult<Outcome> {
        let tokenized = self.read_document(source)?.tokenize(separator)?;
        if tokenized.segments().is_empty() {
            info!("no marker segments found");
            return Ok(Outcome::Unchanged);
        }

        let mut written = 0usize;
        for segment in tokenized.segments() {
            if segment.body_is_blank() {
                debug!(marker = segment.marker().raw(), "blank body, skipping");
                continue;
            }
            let target = segment.marker().resolve(root);
            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&target, segment.trimmed_body())?;
            debug!(target = %target.display(), "segment written");
            written += 1;
        }

        if written == 0 {
            info!("all segment bodies empty, source untouched");
            return Ok(Outcome::Unchanged);
        }

        // Bodies removed, every marker line kept - including the ones whose
        // segments were skipped, so scan-appended references survive a split.
        let rewritten = tokenized.render_markers_only(separator);
        self.filesystem.write_file(source, &rewritten)?;
        info!(files = written, "split complete");
        Ok(Outcome::Changed(written))
    }

    /// Join a composite file back together from its target files.
    ///
    /// Each segment whose marker resolves to an existing file gets its body
    /// replaced by that file's current content plus one terminator; markers
    /// without a file on disk are left byte-identical. The target files are
    /// never deleted - they stay the source of truth, the composite is a
    /// rebuildable view.
    #[instrument(skip_all, fields(source = %source.display(), root = %root.display()))]
    pub fn join(
        &self,
        source: &Path,
        root: &Path,
        separator: &Separator,
    ) -> SpliceResult<Outcome> {
        let mut tokenized = self.read_document(source)?.tokenize(separator)?;
        if tokenized.segments().is_empty() {
            info!("no marker segments found");
            return Ok(Outcome::Unchanged);
        }

        let terminator = tokenized.ending().as_str();
        let mut joined = 0usize;
        for segment in tokenized.segments_mut() {
            let target = segment.marker().resolve(root);
            if !self.filesystem.exists(&target) {
                debug!(target = %target.display(), "target missing, segment left as-is");
                continue;
            }
            let content = self.filesystem.read_to_string(&target)?;
            segment.set_body(format!("{content}{terminator}"));
            joined += 1;
        }

        if joined == 0 {
            info!("no marker resolved to an existing file");
            return Ok(Outcome::Unchanged);
        }

        let rewritten = tokenized.render(separator);
        self.filesystem.write_file(source, &rewritten)?;
        info!(files = joined, "join complete");
        Ok(Outcome::Changed(joined))
    }

    /// Scan the project for files referencing the source file's table and
    /// append them to the source as new markers with empty bodies.
    ///
    /// The table name is the source's base name, lower-cased and truncated
    /// at the first dot. Candidate files come from the fixed category
    /// directories under `root`; a candidate matches when its path contains
    /// the table name and its normalized content carries one of the known
    /// reference phrases. Best-effort textual heuristic, not a parser.
    #[instrument(skip_all, fields(source = %source.display(), root = %root.display()))]
    pub fn scan(
        &self,
        source: &Path,
        root: &Path,
        separator: &Separator,
    ) -> SpliceResult<Outcome> {
        let Some(table) = references::table_name(source) else {
            info!("source has no usable base name");
            return Ok(Outcome::Unchanged);
        };
        let document = self.read_document(source)?;

        let mut markers: Vec<String> = Vec::new();
        for dir in references::SCAN_DIRS {
            for file in self.filesystem.walk_files(&root.join(dir))? {
                if file.as_path() == source {
                    continue;
                }
                if let Some(marker) = self.match_candidate(&file, root, &table)? {
                    markers.push(marker);
                }
            }
        }

        if markers.is_empty() {
            info!(table = %table, "no referencing files found");
            return Ok(Outcome::Unchanged);
        }

        let terminator = document.ending().as_str();
        let mut text = document.text().to_string();
        if !text.ends_with(terminator) {
            text.push_str(terminator);
        }
        // one blank line, then the discovered markers as empty segments
        text.push_str(terminator);
        for marker in &markers {
            text.push_str(separator.as_str());
            text.push_str(marker);
            text.push_str(terminator);
        }

        self.filesystem.write_file(source, &text)?;
        info!(table = %table, references = markers.len(), "scan complete");
        Ok(Outcome::Changed(markers.len()))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn read_document(&self, source: &Path) -> SpliceResult<CompositeDocument> {
        if !self.filesystem.exists(source) {
            return Err(ApplicationError::SourceNotFound {
                path: source.to_path_buf(),
            }
            .into());
        }
        let text = self.filesystem.read_to_string(source)?;
        Ok(CompositeDocument::parse(text))
    }

    /// Check one candidate file; returns its marker path relative to `root`
    /// when it references `table`.
    fn match_candidate(
        &self,
        file: &Path,
        root: &Path,
        table: &str,
    ) -> SpliceResult<Option<String>> {
        let path_str = file.to_string_lossy().replace('\\', "/");
        if !path_str.to_ascii_lowercase().contains(table) {
            return Ok(None);
        }

        let content = match self.filesystem.read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                warn!(file = %file.display(), error = %e, "candidate unreadable, skipping");
                return Ok(None);
            }
        };
        if !references::references_table(&references::normalize_sql(&content), table) {
            return Ok(None);
        }

        let relative = file
            .strip_prefix(root)
            .map(|rel| rel.to_string_lossy().replace('\\', "/"))
            .unwrap_or(path_str);
        Ok(Some(relative))
    }
}
