use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Rejections raised while normalising a raw nucleotide string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Sequence is empty.")]
    EmptySequence,

    #[error("Invalid characters detected: '{symbol}' at position {index} (expected A, T, C or G)")]
    InvalidSymbol { symbol: char, index: usize },
}

/// Rejections raised while applying a point substitution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("Mutation position {position} is out of range for a sequence of length {length}")]
    PositionOutOfRange { position: usize, length: usize },

    #[error("Replacement nucleotide '{0}' is not one of A, T, C, G")]
    InvalidBase(char),
}

#[derive(Debug, Error)]
pub enum GenolabError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Mutation(#[from] MutationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GenolabError {
    /// Short machine-readable label for the error family.
    pub fn kind(&self) -> &'static str {
        match self {
            GenolabError::Validation(ValidationError::EmptySequence) => "empty_sequence",
            GenolabError::Validation(ValidationError::InvalidSymbol { .. }) => "invalid_symbol",
            GenolabError::Mutation(MutationError::PositionOutOfRange { .. }) => "position_out_of_range",
            GenolabError::Mutation(MutationError::InvalidBase(_)) => "invalid_base",
            GenolabError::Io(_) => "io",
            GenolabError::Serialization(_) => "serialization",
            GenolabError::Toml(_) => "toml",
            GenolabError::Yaml(_) => "yaml",
            GenolabError::Config(_) => "config",
            GenolabError::Other(_) => "internal",
        }
    }

    /// User-input errors halt the pipeline but are not system faults.
    pub fn is_user_input(&self) -> bool {
        matches!(self, GenolabError::Validation(_) | GenolabError::Mutation(_))
    }
}

pub type Result<T> = std::result::Result<T, GenolabError>;

// ── HTTP mapping ─────────────────────────────────────────────────────────────

/// Error returned by the web handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unprocessable(GenolabError),

    #[error("{0}")]
    Internal(GenolabError),
}

impl From<GenolabError> for ApiError {
    fn from(err: GenolabError) -> Self {
        if err.is_user_input() {
            ApiError::Unprocessable(err)
        } else {
            ApiError::Internal(err)
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::from(GenolabError::from(err))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (ApiError::Unprocessable(inner) | ApiError::Internal(inner)) = &self;
        if status.is_server_error() {
            tracing::error!(kind = inner.kind(), "Request failed: {}", inner);
        }
        let body = serde_json::json!({
            "error": inner.to_string(),
            "kind": inner.kind(),
        });
        (status, Json(body)).into_response()
    }
}
