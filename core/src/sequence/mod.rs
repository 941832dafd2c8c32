//! Binary sequence value type and generation
//!
//! A sequence is 128 characters of '0'/'1': two 64-bit words drawn from an
//! injected [`SequenceRng`](crate::rng::SequenceRng), each rendered
//! most-significant-bit first at full width, concatenated in draw order.

mod binary;
mod generator;

pub use binary::BinarySequence;
pub use generator::{generate, generate_from_entropy};

/// Bits contributed by a single drawn word.
pub const WORD_BITS: usize = 64;

/// Number of words drawn per sequence.
pub const SEQUENCE_WORDS: usize = 2;

/// Total length of a sequence in bits (and in characters).
pub const SEQUENCE_BITS: usize = WORD_BITS * SEQUENCE_WORDS;
