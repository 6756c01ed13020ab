//! genolab-seq: Nucleotide handling for GenoLab.
//!
//!   1. Normalising and validating raw DNA input
//!   2. Applying a single-base substitution
//!   3. Translating DNA to protein with the standard genetic code

pub mod sequence;
pub mod validate;
pub mod mutate;
pub mod codon;
pub mod translate;

pub use sequence::{AminoAcidSequence, NucleotideSequence};
pub use validate::validate;
pub use mutate::{apply_point_mutation, PointMutation};
pub use translate::translate;
