//! Domain entities: composite documents, their segments, and marker paths.

pub mod document;
pub mod marker;

pub use document::{CompositeDocument, Segment, Tokenized};
pub use marker::{MarkerPath, PARENT_ESCAPE};
