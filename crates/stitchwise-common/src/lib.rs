//! stitchwise-common — Shared types and errors used across all Stitchwise crates.

pub mod error;
pub mod record;
pub mod handoff;

// Re-export commonly used types
pub use error::{Result, StitchwiseError};
pub use handoff::Handoff;
pub use record::RawAnalysisRecord;
