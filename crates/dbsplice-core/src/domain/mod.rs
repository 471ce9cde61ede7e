//! Core domain layer for dbsplice.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod references;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    document::{CompositeDocument, Segment, Tokenized},
    marker::{MarkerPath, PARENT_ESCAPE},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{LineEnding, Separator};
