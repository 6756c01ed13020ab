//! Hereditary-risk presentation keyed by tier.

use genolab_common::entities::{HereditaryProfile, RiskTier};

/// Pathogenic variants are presented as autosomal dominant; every other
/// tier as sporadic.
pub fn get_inheritance(tier: RiskTier) -> HereditaryProfile {
    match tier {
        RiskTier::Pathogenic => HereditaryProfile {
            pattern: "Autosomal Dominant".to_string(),
            sibling_risk: "50%".to_string(),
            offspring_risk: "50%".to_string(),
            note: "High priority for Cascade Testing.".to_string(),
        },
        RiskTier::Benign | RiskTier::Vus => HereditaryProfile {
            pattern: "Sporadic".to_string(),
            sibling_risk: "<1%".to_string(),
            offspring_risk: "<1%".to_string(),
            note: "No immediate family screening required.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pathogenic_is_dominant() {
        let p = get_inheritance(RiskTier::Pathogenic);
        assert_eq!(p.pattern, "Autosomal Dominant");
        assert_eq!(p.sibling_risk, "50%");
        assert_eq!(p.offspring_risk, "50%");
        assert_eq!(p.note, "High priority for Cascade Testing.");
    }

    #[test]
    fn test_other_tiers_are_sporadic() {
        for tier in [RiskTier::Benign, RiskTier::Vus] {
            let p = get_inheritance(tier);
            assert_eq!(p.pattern, "Sporadic");
            assert_eq!(p.sibling_risk, "<1%");
            assert_eq!(p.offspring_risk, "<1%");
            assert_eq!(p.note, "No immediate family screening required.");
        }
    }

    #[test]
    fn test_lookup_by_label() {
        let tier: RiskTier = "Pathogenic".parse().unwrap();
        assert_eq!(get_inheritance(tier).pattern, "Autosomal Dominant");
    }
}
