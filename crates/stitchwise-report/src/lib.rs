//! stitchwise-report — turns a raw analyzer record into the report model.
//!
//! Everything here is pure: no I/O, no shared state. The report view renders
//! only what `normalize` produced; nothing is computed ad hoc in handlers.

pub mod band;
pub mod links;
pub mod report;

pub use band::{score_description, RatingBand};
pub use links::parse_related_links;
pub use report::{normalize, EthicsReport, InfoCard};
