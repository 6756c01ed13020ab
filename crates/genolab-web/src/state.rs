//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Instant;

use genolab_clinical::AnalysisPipeline;
use genolab_common::error::Result;
use genolab_common::lab_config::LabConfig;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: LabConfig,
    pub pipeline: AnalysisPipeline,
    pub started_at: Instant,
}

impl AppState {
    /// Fails when the configuration does not validate.
    pub fn new(config: LabConfig) -> Result<Self> {
        let pipeline = AnalysisPipeline::from_config(&config)?;
        Ok(Self {
            config,
            pipeline,
            started_at: Instant::now(),
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            config: LabConfig::default(),
            pipeline: AnalysisPipeline::new(),
            started_at: Instant::now(),
        }
    }
}

pub type SharedState = Arc<AppState>;
