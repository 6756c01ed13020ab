//! Orchestrator for a single mutation analysis.
//!
//! validate → mutate → translate (original, mutated) → classify → annotate

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use genolab_common::entities::{AnalysisReport, MutationRequest};
use genolab_common::error::Result;
use genolab_common::lab_config::LabConfig;
use genolab_seq::{apply_point_mutation, translate, validate};

use crate::attention::attention_for;
use crate::classifier::{classify_with, protein_impact};
use crate::hereditary::get_inheritance;
use crate::pharmaco::{analyze_with, MarkerTable, PharmacoProvider, StandardTable};
use crate::policy::TierPolicy;
use crate::screening::screening_list;

/// Immutable after construction; share behind an `Arc`.
pub struct AnalysisPipeline {
    policy: TierPolicy,
    pharmaco: Arc<dyn PharmacoProvider>,
    attention_seed: Option<u64>,
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisPipeline {
    /// Default policy, built-in marker table, unseeded attention weights.
    pub fn new() -> Self {
        Self {
            policy: TierPolicy::default(),
            pharmaco: Arc::new(StandardTable),
            attention_seed: None,
        }
    }

    /// Build from a loaded configuration. The configuration is validated
    /// first, so scores always stay in [0, 1].
    pub fn from_config(config: &LabConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            policy: TierPolicy::from(&config.classifier),
            pharmaco: Arc::new(MarkerTable::from_config(&config.pharmacogenomics)),
            attention_seed: config.attention.seed,
        })
    }

    pub fn with_provider(mut self, provider: Arc<dyn PharmacoProvider>) -> Self {
        self.pharmaco = provider;
        self
    }

    pub fn with_attention_seed(mut self, seed: Option<u64>) -> Self {
        self.attention_seed = seed;
        self
    }

    /// Run the full analysis. Validation and mutation errors are returned
    /// before anything is translated.
    pub fn run(&self, request: &MutationRequest) -> Result<AnalysisReport> {
        let original_dna = validate(&request.sequence)?;
        let (mutated_dna, change) =
            apply_point_mutation(&original_dna, request.position, request.base)?;

        debug!(
            position = change.position,
            reference = %change.reference,
            alternative = %change.alternative,
            "Applied point mutation"
        );

        let original_protein = translate(&original_dna);
        let mutated_protein = translate(&mutated_dna);

        debug!(
            original = %original_protein,
            mutated = %mutated_protein,
            "Translated sequences"
        );

        let risk = classify_with(&self.policy, &original_protein, &mutated_protein);
        let impact = protein_impact(&original_protein, &mutated_protein);
        let pharmacogenomics = analyze_with(self.pharmaco.as_ref(), &mutated_protein);
        let hereditary = get_inheritance(risk.tier);
        let screening = screening_list(risk.tier);
        let attention = attention_for(&mutated_dna, self.attention_seed);

        info!(
            tier = %risk.tier,
            score = risk.score,
            length = original_dna.len(),
            "Variant analysis complete"
        );

        Ok(AnalysisReport {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            original_dna: original_dna.into_string(),
            mutated_dna: mutated_dna.into_string(),
            original_protein: original_protein.into_string(),
            mutated_protein: mutated_protein.into_string(),
            impact,
            risk,
            pharmacogenomics,
            hereditary,
            screening,
            attention,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genolab_common::entities::{ProteinImpact, RiskTier};
    use genolab_common::error::{GenolabError, MutationError, ValidationError};

    fn request(sequence: &str, position: usize, base: char) -> MutationRequest {
        MutationRequest { sequence: sequence.to_string(), position, base }
    }

    #[test]
    fn test_silent_substitution_is_benign() {
        // Position 0 keeps A: nothing changes.
        let report = AnalysisPipeline::new().run(&request("ATGCGTACGTTAGCAGC", 0, 'A')).unwrap();
        assert_eq!(report.original_protein, "MRTLA");
        assert_eq!(report.mutated_protein, "MRTLA");
        assert_eq!(report.impact, ProteinImpact::Silent);
        assert_eq!(report.risk.tier, RiskTier::Benign);
    }

    #[test]
    fn test_invalid_sequence_halts() {
        let err = AnalysisPipeline::new().run(&request("ATGX", 0, 'A')).unwrap_err();
        assert!(matches!(err, GenolabError::Validation(ValidationError::InvalidSymbol { .. })));
    }

    #[test]
    fn test_out_of_range_position_halts() {
        let err = AnalysisPipeline::new().run(&request("ATG", 5, 'A')).unwrap_err();
        assert!(matches!(
            err,
            GenolabError::Mutation(MutationError::PositionOutOfRange { position: 5, length: 3 })
        ));
    }

    #[test]
    fn test_from_config_rejects_out_of_range_score() {
        let config: LabConfig = toml::from_str("[classifier]\npathogenic_score = 7.0").unwrap();
        let err = AnalysisPipeline::from_config(&config).err().unwrap();
        assert!(matches!(err, GenolabError::Config(_)));
        assert_eq!(err.kind(), "config");
    }

    #[test]
    fn test_from_config_rejects_bad_ratio() {
        let mut config = LabConfig::default();
        config.classifier.pathogenic_length_ratio = 1.5;
        assert!(AnalysisPipeline::from_config(&config).is_err());
    }

    #[test]
    fn test_default_config_matches_new() {
        let request = request("ATGCGTACGTTAGCAGC", 10, 'A');
        let configured = AnalysisPipeline::from_config(&LabConfig::default()).unwrap();
        let a = configured.run(&request).unwrap();
        let b = AnalysisPipeline::new().run(&request).unwrap();
        assert_eq!(a.risk, b.risk);
        assert_eq!(a.pharmacogenomics, b.pharmacogenomics);
    }

    #[test]
    fn test_seeded_attention_matches_length() {
        let pipeline = AnalysisPipeline::new().with_attention_seed(Some(1));
        let a = pipeline.run(&request("ATGCGT", 1, 'C')).unwrap();
        let b = pipeline.run(&request("ATGCGT", 1, 'C')).unwrap();
        assert_eq!(a.attention.len(), 6);
        assert_eq!(a.attention, b.attention);
        assert_ne!(a.id, b.id);
    }
}
