//! DNA → protein translation.

use crate::codon::{translate_codon, STOP};
use crate::sequence::{AminoAcidSequence, NucleotideSequence};

/// Translate in frame 0, stopping at (and excluding) the first stop codon.
///
/// A trailing partial codon of one or two bases is dropped silently.
/// Fewer than three bases yields an empty protein.
pub fn translate(seq: &NucleotideSequence) -> AminoAcidSequence {
    let mut protein = String::with_capacity(seq.codon_count());

    for codon in seq.as_bytes().chunks_exact(3) {
        match translate_codon(codon) {
            Some(STOP) | None => break,
            Some(aa) => protein.push(aa as char),
        }
    }

    AminoAcidSequence::new(protein)
}
