//! Sequence newtypes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Uppercase DNA over {A, T, C, G}; never empty.
///
/// Only [`crate::validate::validate`] and [`crate::mutate::apply_point_mutation`]
/// construct values of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NucleotideSequence(String);

impl NucleotideSequence {
    pub(crate) fn from_normalized(bases: String) -> Self {
        debug_assert!(!bases.is_empty());
        debug_assert!(bases.bytes().all(|b| matches!(b, b'A' | b'T' | b'C' | b'G')));
        Self(bases)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of complete codons.
    pub fn codon_count(&self) -> usize {
        self.0.len() / 3
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NucleotideSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One-letter amino-acid codes, stop codon excluded. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AminoAcidSequence(String);

impl AminoAcidSequence {
    pub fn new(residues: impl Into<String>) -> Self {
        Self(residues.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Leading residue, used as the pharmacogenomic marker.
    pub fn first(&self) -> Option<char> {
        self.0.chars().next()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for AminoAcidSequence {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AminoAcidSequence {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for AminoAcidSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AminoAcidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amino_acid_first_and_len() {
        let protein = AminoAcidSequence::from("MRTLA");
        assert_eq!(protein.first(), Some('M'));
        assert_eq!(protein.len(), 5);
        assert!(AminoAcidSequence::default().first().is_none());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let protein = AminoAcidSequence::from("MR");
        assert_eq!(serde_json::to_string(&protein).unwrap(), "\"MR\"");
        let dna = NucleotideSequence::from_normalized("ATG".to_string());
        assert_eq!(serde_json::to_string(&dna).unwrap(), "\"ATG\"");
        assert_eq!(dna.codon_count(), 1);
    }
}
