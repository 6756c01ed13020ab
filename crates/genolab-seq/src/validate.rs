//! Raw input normalisation.

use genolab_common::error::ValidationError;

use crate::sequence::NucleotideSequence;

/// Normalise and validate a raw nucleotide string.
///
/// Everything that is not an ASCII letter is stripped (whitespace, dashes,
/// digits, FASTA-style gaps) and the rest is uppercased. The result must be
/// non-empty and contain only A, T, C and G.
pub fn validate(raw: &str) -> Result<NucleotideSequence, ValidationError> {
    let normalized: String = raw
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if normalized.is_empty() {
        return Err(ValidationError::EmptySequence);
    }

    if let Some((index, symbol)) = normalized
        .char_indices()
        .find(|(_, c)| !is_nucleotide(*c))
    {
        return Err(ValidationError::InvalidSymbol { symbol, index });
    }

    Ok(NucleotideSequence::from_normalized(normalized))
}

/// True for the four uppercase DNA bases.
pub fn is_nucleotide(c: char) -> bool {
    matches!(c, 'A' | 'T' | 'C' | 'G')
}
