//! Centralized error handling for the M3U Scanner application
//!
//! Per-candidate probe failures are not errors: they are classification
//! results (`ProbeOutcome::Invalid` / `ProbeOutcome::Errored`) and never
//! interrupt a running scan. The types here cover the failures that do
//! abort a run: bad configuration and output stream I/O.

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for output stream Results
pub type OutputResult<T> = Result<T, OutputError>;
