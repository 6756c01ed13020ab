//! Rule-based variant tiering.
//!
//! Length shrinkage stands in for truncating / nonsense changes. The rules
//! are deliberately coarse and evaluated in order, first match wins:
//!
//! 1. identical proteins            → Benign
//! 2. mutated < ratio × original    → Pathogenic
//! 3. anything else                 → VUS

use genolab_common::entities::{ProteinImpact, RiskAssessment, RiskTier};
use genolab_seq::AminoAcidSequence;

use crate::policy::TierPolicy;

pub const BENIGN_ACTION: &str = "Routine monitoring.";
pub const PATHOGENIC_ACTION: &str = "Urgent specialist referral.";
pub const VUS_ACTION: &str = "Family history correlation needed.";

/// Classify with the default policy (0.8 length ratio; 0.05 / 0.95 / 0.45).
pub fn classify(original: &AminoAcidSequence, mutated: &AminoAcidSequence) -> RiskAssessment {
    classify_with(&TierPolicy::default(), original, mutated)
}

pub fn classify_with(
    policy: &TierPolicy,
    original: &AminoAcidSequence,
    mutated: &AminoAcidSequence,
) -> RiskAssessment {
    if mutated == original {
        return RiskAssessment {
            tier: RiskTier::Benign,
            score: policy.benign_score,
            action: BENIGN_ACTION.to_string(),
        };
    }

    let threshold = original.len() as f64 * policy.pathogenic_length_ratio;
    if (mutated.len() as f64) < threshold {
        return RiskAssessment {
            tier: RiskTier::Pathogenic,
            score: policy.pathogenic_score,
            action: PATHOGENIC_ACTION.to_string(),
        };
    }

    RiskAssessment {
        tier: RiskTier::Vus,
        score: policy.vus_score,
        action: VUS_ACTION.to_string(),
    }
}

/// Silent when the proteins are identical, missense otherwise.
pub fn protein_impact(original: &AminoAcidSequence, mutated: &AminoAcidSequence) -> ProteinImpact {
    if original == mutated {
        ProteinImpact::Silent
    } else {
        ProteinImpact::Missense
    }
}
