//! Service layer for the scan pipeline.
//!
//! ## Service map
//! - `ingest.rs` — per-file CSV loading and the file skip-reason taxonomy.
//! - `aggregate.rs` — key normalization and occurrence indexing.
//! - `report.rs` — banner, diagnostics, and summary rendering.
//! - `scan.rs` — sequential orchestration of the three phases.
//!
//! ## Conventions
//! - Phases are pure functions over explicit data; no ambient state.
//! - All user-facing text goes through `report.rs`.
//! - Per-file failures are values, never process aborts.

pub mod aggregate;
pub mod ingest;
pub mod report;
pub mod scan;
