//! Stand-alone validation and translation endpoints.

use axum::Json;
use serde::{Deserialize, Serialize};

use genolab_common::error::ApiError;
use genolab_seq::{translate, validate};

#[derive(Debug, Deserialize)]
pub struct SequenceBody {
    pub sequence: String,
}

#[derive(Debug, Serialize)]
pub struct ValidatedSequence {
    pub sequence: String,
    pub length: usize,
    pub codons: usize,
}

#[derive(Debug, Serialize)]
pub struct TranslatedSequence {
    pub sequence: String,
    pub protein: String,
}

/// POST /api/validate
pub async fn api_validate(Json(body): Json<SequenceBody>) -> Result<Json<ValidatedSequence>, ApiError> {
    let seq = validate(&body.sequence)?;
    Ok(Json(ValidatedSequence {
        length: seq.len(),
        codons: seq.codon_count(),
        sequence: seq.into_string(),
    }))
}

/// POST /api/translate
pub async fn api_translate(Json(body): Json<SequenceBody>) -> Result<Json<TranslatedSequence>, ApiError> {
    let seq = validate(&body.sequence)?;
    let protein = translate(&seq);
    Ok(Json(TranslatedSequence {
        sequence: seq.into_string(),
        protein: protein.into_string(),
    }))
}
