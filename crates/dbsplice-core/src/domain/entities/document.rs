use crate::domain::entities::marker::MarkerPath;
use crate::domain::error::DomainError;
use crate::domain::value_objects::{LineEnding, Separator};

/// A file that may textually embed the contents of other files via inline
/// markers.
///
/// A composite document is read fresh from disk at the start of every
/// operation and never cached across invocations; everything derived from it
/// lives only for the duration of one operation.
#[derive(Debug, Clone)]
pub struct CompositeDocument {
    text: String,
    ending: LineEnding,
}

impl CompositeDocument {
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let ending = LineEnding::detect(&text);
        Self { text, ending }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn ending(&self) -> LineEnding {
        self.ending
    }

    /// Split the document on every occurrence of the separator token.
    ///
    /// Segment 0 is the preamble: everything before the first occurrence,
    /// kept verbatim and never written to a file. Each later segment starts
    /// with its marker line (first line up to the detected terminator); the
    /// rest is the segment body.
    ///
    /// A document without any separator occurrence tokenizes to a
    /// preamble-only result; callers treat that as "nothing to do", not as
    /// an error.
    pub fn tokenize(&self, separator: &Separator) -> Result<Tokenized, DomainError> {
        let terminator = self.ending.as_str();
        let mut parts = self.text.split(separator.as_str());
        let preamble = parts.next().unwrap_or_default().to_string();

        let mut segments = Vec::new();
        for (index, part) in parts.enumerate() {
            let (marker_line, body) = match part.split_once(terminator) {
                Some((line, rest)) => (line, rest),
                None => (part, ""),
            };
            let marker = MarkerPath::parse(marker_line, index + 1)?;
            segments.push(Segment {
                marker,
                body: body.to_string(),
            });
        }

        Ok(Tokenized {
            preamble,
            segments,
            ending: self.ending,
        })
    }
}

/// One marker line plus its following body text, up to the next marker or
/// the end of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    marker: MarkerPath,
    body: String,
}

impl Segment {
    pub fn marker(&self) -> &MarkerPath {
        &self.marker
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Replace the body (used by join to inline fresh file content).
    pub fn set_body(&mut self, body: String) {
        self.body = body;
    }

    /// True when the body carries no content worth writing to a file.
    pub fn body_is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// The body trimmed of the whitespace introduced around the
    /// tokenization boundary.
    pub fn trimmed_body(&self) -> &str {
        self.body.trim()
    }
}

/// Result of tokenizing a [`CompositeDocument`].
#[derive(Debug, Clone)]
pub struct Tokenized {
    preamble: String,
    segments: Vec<Segment>,
    ending: LineEnding,
}

impl Tokenized {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub fn ending(&self) -> LineEnding {
        self.ending
    }

    /// Render preamble + segments back into document text.
    ///
    /// Every segment contributes `separator + marker line + terminator +
    /// body`; bodies are emitted verbatim.
    pub fn render(&self, separator: &Separator) -> String {
        let terminator = self.ending.as_str();
        let mut out = String::with_capacity(self.text_len(separator));
        out.push_str(&self.preamble);
        for segment in &self.segments {
            out.push_str(separator.as_str());
            out.push_str(segment.marker.raw());
            out.push_str(terminator);
            out.push_str(&segment.body);
        }
        out
    }

    /// Render with all bodies removed: the preamble followed by the ordered
    /// marker lines. This is the rewritten source produced by a split.
    pub fn render_markers_only(&self, separator: &Separator) -> String {
        let terminator = self.ending.as_str();
        let mut out = String::with_capacity(self.preamble.len() + self.segments.len() * 40);
        out.push_str(&self.preamble);
        for segment in &self.segments {
            out.push_str(separator.as_str());
            out.push_str(segment.marker.raw());
            out.push_str(terminator);
        }
        out
    }

    fn text_len(&self, separator: &Separator) -> usize {
        self.preamble.len()
            + self
                .segments
                .iter()
                .map(|s| separator.as_str().len() + s.marker.raw().len() + 2 + s.body.len())
                .sum::<usize>()
    }
}
