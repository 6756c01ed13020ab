//! Per-position "attention" weights for the mutated sequence.
//!
//! Purely cosmetic: one uniform draw in [0, 1) per nucleotide. The RNG is
//! injected so callers can pin a seed for reproducible output.

use genolab_common::entities::AttentionWeight;
use genolab_seq::NucleotideSequence;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn attention_weights<R: Rng + ?Sized>(
    seq: &NucleotideSequence,
    rng: &mut R,
) -> Vec<AttentionWeight> {
    seq.as_str()
        .chars()
        .enumerate()
        .map(|(position, base)| AttentionWeight {
            position,
            base,
            weight: rng.gen::<f64>(),
        })
        .collect()
}

/// Seeded `StdRng` when `seed` is set, otherwise the thread-local RNG.
pub fn attention_for(seq: &NucleotideSequence, seed: Option<u64>) -> Vec<AttentionWeight> {
    match seed {
        Some(seed) => attention_weights(seq, &mut StdRng::seed_from_u64(seed)),
        None => attention_weights(seq, &mut rand::thread_rng()),
    }
}
