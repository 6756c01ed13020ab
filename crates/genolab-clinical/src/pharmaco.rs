//! Pharmacogenomic marker lookup.
//!
//! The first residue of the mutated protein is used as a marker and mapped
//! to a static drug-response record. Providers sit behind a trait so the
//! configured table and test doubles are interchangeable.

use std::collections::HashMap;

use genolab_common::entities::{MetabolizerEffect, PharmacogenomicRecord};
use genolab_common::lab_config::PharmacoConfig;
use genolab_seq::AminoAcidSequence;

/// Source of marker → record mappings.
pub trait PharmacoProvider: Send + Sync {
    /// Record registered for a one-letter amino-acid marker, if any.
    fn record_for(&self, marker: char) -> Option<PharmacogenomicRecord>;

    /// Record used for markers the provider does not know.
    fn fallback(&self) -> PharmacogenomicRecord {
        fallback_record()
    }
}

const STANDARD_MARKERS: [(char, &str, MetabolizerEffect, &str); 5] = [
    ('M', "Statins",     MetabolizerEffect::Normal,     "Standard dosing."),
    ('V', "Warfarin",    MetabolizerEffect::Slow,       "High bleeding risk; lower dose."),
    ('A', "Ibuprofen",   MetabolizerEffect::Rapid,      "May require higher dose."),
    ('L', "Clopidogrel", MetabolizerEffect::Poor,       "Consider alternative antiplatelet."),
    ('S', "Codeine",     MetabolizerEffect::UltraRapid, "Toxicity risk; use caution."),
];

pub fn fallback_record() -> PharmacogenomicRecord {
    PharmacogenomicRecord::new("General", MetabolizerEffect::Standard, "No specific alerts.")
}

// ── Built-in table ───────────────────────────────────────────────────────────

/// The five built-in markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTable;

impl PharmacoProvider for StandardTable {
    fn record_for(&self, marker: char) -> Option<PharmacogenomicRecord> {
        STANDARD_MARKERS
            .iter()
            .find(|(m, ..)| *m == marker)
            .map(|(_, drug, effect, advice)| PharmacogenomicRecord::new(drug, *effect, advice))
    }
}

// ── Configurable table ───────────────────────────────────────────────────────

/// Marker table assembled at start-up: built-ins plus configured extras.
#[derive(Debug, Clone, Default)]
pub struct MarkerTable {
    entries: HashMap<char, PharmacogenomicRecord>,
}

impl MarkerTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        STANDARD_MARKERS
            .iter()
            .fold(Self::empty(), |table, (m, drug, effect, advice)| {
                table.with(*m, PharmacogenomicRecord::new(drug, *effect, advice))
            })
    }

    /// Built-ins, then every configured marker (which may override one).
    pub fn from_config(config: &PharmacoConfig) -> Self {
        config.markers.iter().fold(Self::standard(), |table, m| {
            table.with(m.marker, PharmacogenomicRecord::new(&m.drug, m.effect, &m.advice))
        })
    }

    /// Register (or replace) a marker.
    pub fn with(mut self, marker: char, record: PharmacogenomicRecord) -> Self {
        self.entries.insert(marker, record);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PharmacoProvider for MarkerTable {
    fn record_for(&self, marker: char) -> Option<PharmacogenomicRecord> {
        self.entries.get(&marker).cloned()
    }
}

// ── Lookup ───────────────────────────────────────────────────────────────────

/// Look up the marker of `mutated` in the built-in table.
///
/// Returns `None` for an empty protein (there is no marker to key on);
/// unknown markers get the "General" fallback record.
pub fn analyze(mutated: &AminoAcidSequence) -> Option<PharmacogenomicRecord> {
    analyze_with(&StandardTable, mutated)
}

pub fn analyze_with(
    provider: &dyn PharmacoProvider,
    mutated: &AminoAcidSequence,
) -> Option<PharmacogenomicRecord> {
    let marker = mutated.first()?;
    Some(provider.record_for(marker).unwrap_or_else(|| provider.fallback()))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use genolab_common::lab_config::MarkerConfig;

    fn aa(s: &str) -> AminoAcidSequence {
        AminoAcidSequence::from(s)
    }

    #[test]
    fn test_statins_for_methionine() {
        let rec = analyze(&aa("MRTLA")).unwrap();
        assert_eq!(rec.drug, "Statins");
        assert_eq!(rec.effect, MetabolizerEffect::Normal);
        assert_eq!(rec.advice, "Standard dosing.");
    }

    #[test]
    fn test_warfarin_for_valine() {
        let rec = analyze(&aa("VXYZ")).unwrap();
        assert_eq!(rec.drug, "Warfarin");
        assert_eq!(rec.effect, MetabolizerEffect::Slow);
        assert_eq!(rec.advice, "High bleeding risk; lower dose.");
    }

    #[test]
    fn test_all_standard_markers() {
        let expected = [
            ('A', "Ibuprofen", MetabolizerEffect::Rapid),
            ('L', "Clopidogrel", MetabolizerEffect::Poor),
            ('S', "Codeine", MetabolizerEffect::UltraRapid),
        ];
        for (marker, drug, effect) in expected {
            let rec = StandardTable.record_for(marker).unwrap();
            assert_eq!(rec.drug, drug);
            assert_eq!(rec.effect, effect);
        }
    }

    #[test]
    fn test_unknown_marker_falls_back() {
        let rec = analyze(&aa("KRT")).unwrap();
        assert_eq!(rec, fallback_record());
        assert_eq!(rec.drug, "General");
        assert_eq!(rec.effect, MetabolizerEffect::Standard);
        assert_eq!(rec.advice, "No specific alerts.");
    }

    #[test]
    fn test_empty_protein_has_no_result() {
        assert!(analyze(&aa("")).is_none());
    }

    #[test]
    fn test_marker_table_matches_standard() {
        let table = MarkerTable::standard();
        assert_eq!(table.len(), 5);
        for (m, ..) in STANDARD_MARKERS {
            assert_eq!(table.record_for(m), StandardTable.record_for(m));
        }
    }

    #[test]
    fn test_config_markers_layer_over_standard() {
        let config = PharmacoConfig {
            markers: vec![
                MarkerConfig {
                    marker: 'K',
                    drug: "Tamoxifen".to_string(),
                    effect: MetabolizerEffect::Poor,
                    advice: "Consider aromatase inhibitor.".to_string(),
                },
                MarkerConfig {
                    marker: 'M',
                    drug: "Simvastatin".to_string(),
                    effect: MetabolizerEffect::Slow,
                    advice: "Myopathy risk.".to_string(),
                },
            ],
        };
        let table = MarkerTable::from_config(&config);
        assert_eq!(table.len(), 6);
        assert_eq!(analyze_with(&table, &aa("KR")).unwrap().drug, "Tamoxifen");
        assert_eq!(analyze_with(&table, &aa("MR")).unwrap().drug, "Simvastatin");
        assert_eq!(analyze_with(&table, &aa("VR")).unwrap().drug, "Warfarin");
    }
}
