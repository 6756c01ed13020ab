//! Family screening priority list.

use genolab_common::entities::{RiskTier, ScreeningEntry, ScreeningPriority};

const FIRST_DEGREE_RISK: &str = "50%";

/// First-degree relatives in display order. Only the child's priority
/// depends on the tier.
pub fn screening_list(tier: RiskTier) -> Vec<ScreeningEntry> {
    let child_priority = match tier {
        RiskTier::Pathogenic => ScreeningPriority::Critical,
        RiskTier::Benign | RiskTier::Vus => ScreeningPriority::Low,
    };

    [
        ("Father", ScreeningPriority::Medium),
        ("Mother", ScreeningPriority::Medium),
        ("Sibling", ScreeningPriority::High),
        ("Child", child_priority),
    ]
    .into_iter()
    .map(|(relation, priority)| ScreeningEntry {
        relation: relation.to_string(),
        risk: FIRST_DEGREE_RISK.to_string(),
        priority,
    })
    .collect()
}
