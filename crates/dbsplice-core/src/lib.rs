//! dbsplice Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the dbsplice
//! split/join tooling, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          dbsplice-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (SpliceService, CounterpartService)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    dbsplice-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (CompositeDocument, MarkerPath, rules)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dbsplice_core::{
//!     application::SpliceService,
//!     domain::Separator,
//! };
//! # fn demo(filesystem: Box<dyn dbsplice_core::application::Filesystem>) {
//! let separator = Separator::new("-- File: ").unwrap();
//!
//! // Application service (with injected filesystem adapter)
//! let service = SpliceService::new(filesystem);
//! let outcome = service.split(
//!     "db/hr/tables/orders.sql".as_ref(),
//!     "db/hr".as_ref(),
//!     &separator,
//! );
//! # let _ = outcome;
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CounterpartService, Filesystem, Outcome, SpliceService,
    };
    pub use crate::domain::{
        CompositeDocument, LineEnding, MarkerPath, Segment, Separator, Tokenized,
    };
    pub use crate::error::{SpliceError, SpliceResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
