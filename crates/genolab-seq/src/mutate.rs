//! Single-nucleotide substitution.

use genolab_common::error::MutationError;
use serde::Serialize;

use crate::sequence::NucleotideSequence;
use crate::validate::is_nucleotide;

/// A substitution as applied: where, what was there, what replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointMutation {
    pub position: usize, // 0-based
    pub reference: char,
    pub alternative: char,
}

impl PointMutation {
    /// Same base written back; the sequence is unchanged.
    pub fn is_identity(&self) -> bool {
        self.reference == self.alternative
    }
}

/// Replace the base at `position` (0-based) with `base`.
///
/// `base` is case-insensitive. The input is left untouched; a new sequence
/// is returned together with a description of the change.
pub fn apply_point_mutation(
    seq: &NucleotideSequence,
    position: usize,
    base: char,
) -> Result<(NucleotideSequence, PointMutation), MutationError> {
    let alternative = base.to_ascii_uppercase();
    if !is_nucleotide(alternative) {
        return Err(MutationError::InvalidBase(base));
    }

    let length = seq.len();
    if position >= length {
        return Err(MutationError::PositionOutOfRange { position, length });
    }

    let reference = char::from(seq.as_bytes()[position]);
    let mutated: String = seq
        .as_str()
        .chars()
        .enumerate()
        .map(|(i, b)| if i == position { alternative } else { b })
        .collect();

    Ok((
        NucleotideSequence::from_normalized(mutated),
        PointMutation { position, reference, alternative },
    ))
}
