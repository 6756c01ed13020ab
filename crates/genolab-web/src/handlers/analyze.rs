//! Mutation analysis API: runs the full clinical pipeline.

use axum::{extract::State, Json};
use serde::Deserialize;

use genolab_common::entities::{AnalysisReport, MutationRequest};
use genolab_common::error::ApiError;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Falls back to `defaults.sequence` from the config when omitted.
    pub sequence: Option<String>,
    pub position: usize,
    pub base: char,
}

/// POST /api/analyze: Apply one substitution and interpret it
pub async fn api_analyze(
    State(state): State<SharedState>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let request = MutationRequest {
        sequence: body
            .sequence
            .unwrap_or_else(|| state.config.defaults.sequence.clone()),
        position: body.position,
        base: body.base,
    };

    tracing::info!(
        position = request.position,
        base = %request.base,
        length = request.sequence.len(),
        "Analysis requested"
    );

    let report = state.pipeline.run(&request)?;
    Ok(Json(report))
}
