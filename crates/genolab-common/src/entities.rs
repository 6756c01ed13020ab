//! Value records passed between the sequence, clinical and presentation layers.
//! All of them are created fresh per request and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Risk tier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Benign,
    #[serde(rename = "VUS")]
    Vus,
    Pathogenic,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Benign     => "Benign",
            RiskTier::Vus        => "VUS",
            RiskTier::Pathogenic => "Pathogenic",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Benign"          => Ok(RiskTier::Benign),
            "VUS" | "Vus"     => Ok(RiskTier::Vus),
            "Pathogenic"      => Ok(RiskTier::Pathogenic),
            other             => Err(format!("unknown risk tier: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Risk assessment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    pub score: f64, // 0.0–1.0
    pub action: String,
}

impl RiskAssessment {
    /// Score as a whole percentage, truncated.
    pub fn score_percent(&self) -> u32 {
        (self.score * 100.0) as u32
    }
}

// ---------------------------------------------------------------------------
// Pharmacogenomics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetabolizerEffect {
    Normal,
    Slow,
    Rapid,
    Poor,
    #[serde(rename = "Ultra-rapid")]
    UltraRapid,
    /// Only used by the fallback record.
    Standard,
}

impl MetabolizerEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetabolizerEffect::Normal     => "Normal",
            MetabolizerEffect::Slow       => "Slow",
            MetabolizerEffect::Rapid      => "Rapid",
            MetabolizerEffect::Poor       => "Poor",
            MetabolizerEffect::UltraRapid => "Ultra-rapid",
            MetabolizerEffect::Standard   => "Standard",
        }
    }
}

impl fmt::Display for MetabolizerEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacogenomicRecord {
    pub drug: String,
    pub effect: MetabolizerEffect,
    pub advice: String,
}

impl PharmacogenomicRecord {
    pub fn new(drug: &str, effect: MetabolizerEffect, advice: &str) -> Self {
        Self {
            drug: drug.to_string(),
            effect,
            advice: advice.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Hereditary risk
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HereditaryProfile {
    pub pattern: String,
    pub sibling_risk: String,
    pub offspring_risk: String,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreeningPriority {
    Low,
    Medium,
    High,
    Critical,
}

/// One row of the family screening table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningEntry {
    pub relation: String,
    pub risk: String,
    pub priority: ScreeningPriority,
}

// ---------------------------------------------------------------------------
// Protein-level impact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProteinImpact {
    /// No change in protein sequence.
    Silent,
    /// Amino acid sequence altered.
    Missense,
}

impl ProteinImpact {
    pub fn description(&self) -> &'static str {
        match self {
            ProteinImpact::Silent   => "Silent Mutation: No change in protein sequence.",
            ProteinImpact::Missense => "Missense Mutation: Amino acid sequence altered.",
        }
    }
}

// ---------------------------------------------------------------------------
// Attention map
// ---------------------------------------------------------------------------

/// Cosmetic per-position weight; carries no analytical meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttentionWeight {
    pub position: usize,
    pub base: char,
    pub weight: f64, // [0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Request / report
// ---------------------------------------------------------------------------

/// A raw sequence plus the single substitution to apply to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationRequest {
    pub sequence: String,
    pub position: usize, // 0-based
    pub base: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub original_dna: String,
    pub mutated_dna: String,
    pub original_protein: String,
    pub mutated_protein: String,
    pub impact: ProteinImpact,
    pub risk: RiskAssessment,
    /// `None` when the mutated protein is empty.
    pub pharmacogenomics: Option<PharmacogenomicRecord>,
    pub hereditary: HereditaryProfile,
    pub screening: Vec<ScreeningEntry>,
    pub attention: Vec<AttentionWeight>,
}
