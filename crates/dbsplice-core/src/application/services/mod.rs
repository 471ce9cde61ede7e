//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use cases: split, join, scan, and counterpart lookup.

pub mod counterpart_service;
pub mod splice_service;

pub use counterpart_service::CounterpartService;
pub use splice_service::{Outcome, SpliceService};
