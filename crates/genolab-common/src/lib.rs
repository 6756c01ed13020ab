//! genolab-common: Shared value records, errors, and configuration used across all GenoLab crates.

pub mod error;
pub mod entities;
pub mod lab_config;

// Re-export commonly used types
pub use error::{ApiError, GenolabError, MutationError, Result, ValidationError};
pub use entities::{
    AnalysisReport, AttentionWeight, HereditaryProfile, MetabolizerEffect, MutationRequest,
    PharmacogenomicRecord, ProteinImpact, RiskAssessment, RiskTier, ScreeningEntry,
    ScreeningPriority,
};
pub use lab_config::LabConfig;
