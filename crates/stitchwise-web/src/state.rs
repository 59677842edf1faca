//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use stitchwise_client::AnalyzerClient;
use stitchwise_common::record::RawAnalysisRecord;
use stitchwise_common::Handoff;

use crate::config::Config;
use crate::submission::SubmissionGate;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub analyzer: AnalyzerClient,
    /// Single-flight gate for the submission lifecycle.
    pub submission: SubmissionGate,
    /// Carries the latest successful record to the next report render.
    pub handoff: Handoff<RawAnalysisRecord>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            analyzer: AnalyzerClient::new(
                config.analyzer.base_url.clone(),
                Duration::from_secs(config.analyzer.timeout_secs),
            ),
            submission: SubmissionGate::new(),
            handoff: Handoff::new(),
        }
    }
}

pub type SharedState = Arc<AppState>;
