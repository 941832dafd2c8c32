//! Sequence generation
//!
//! Draws exactly two full-range 64-bit words from an injected engine and
//! renders them as one 128-character sequence. Generation itself cannot
//! fail; only entropy seeding can.

use crate::rng::{EntropyError, SequenceRng};

use super::{BinarySequence, SEQUENCE_WORDS};

/// Generate one sequence from the supplied engine.
///
/// The engine is injected so callers choose the seeding policy: tests pass
/// a fixed-seed engine for reproducibility, production seeds from entropy.
///
/// # Example
/// ```
/// use bitseq_core::{sequence, SequenceRng};
///
/// let mut rng = SequenceRng::from_seed(42);
/// let seq = sequence::generate(&mut rng);
/// assert_eq!(seq.as_str().len(), 128);
/// assert!(seq.as_str().chars().all(|c| c == '0' || c == '1'));
/// ```
pub fn generate(rng: &mut SequenceRng) -> BinarySequence {
    let mut words = [0u64; SEQUENCE_WORDS];
    for word in words.iter_mut() {
        *word = rng.next_word();
    }
    BinarySequence::from_words(words)
}

/// Seed a fresh engine from OS entropy, generate one sequence, and drop the
/// engine.
///
/// The engine lives only for this call: no seed is reused across calls and
/// none is persisted.
pub fn generate_from_entropy() -> Result<BinarySequence, EntropyError> {
    let mut rng = SequenceRng::from_entropy()?;
    Ok(generate(&mut rng))
}
