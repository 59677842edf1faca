//! stitchwise-web — Web UI for Stitchwise
//! Provides the two views of the app:
//!   - Submission page: product URL form, one analysis in flight at a time
//!   - Report page: the normalized ethical rating for the last submission

pub mod config;
pub mod router;
pub mod handlers;
pub mod state;
pub mod submission;
