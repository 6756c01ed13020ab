//! Thresholds and scores used by the tier classifier.

use genolab_common::lab_config::ClassifierConfig;
use serde::{Deserialize, Serialize};

/// Cut-offs for the three-tier decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierPolicy {
    /// Mutated protein shorter than this fraction of the original is Pathogenic.
    pub pathogenic_length_ratio: f64,
    /// Score reported for identical proteins.
    pub benign_score: f64,
    /// Score reported when the proteins differ but length is retained.
    pub vus_score: f64,
    /// Score reported for truncated proteins.
    pub pathogenic_score: f64,
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self {
            pathogenic_length_ratio: 0.8,
            benign_score:            0.05,
            vus_score:               0.45,
            pathogenic_score:        0.95,
        }
    }
}

impl From<&ClassifierConfig> for TierPolicy {
    fn from(c: &ClassifierConfig) -> Self {
        Self {
            pathogenic_length_ratio: c.pathogenic_length_ratio,
            benign_score:            c.benign_score,
            vus_score:               c.vus_score,
            pathogenic_score:        c.pathogenic_score,
        }
    }
}
