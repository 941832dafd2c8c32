//! Bitseq Core - Binary Sequence Engine
//!
//! Pseudo-random 128-bit binary sequence generation with statistical
//! quality checks.
//!
//! # Architecture
//!
//! - **rng**: Seeded random number generation
//! - **sequence**: The `BinarySequence` value type and generation routine
//! - **analysis**: Randomness tests over '0'/'1' sequences
//!
//! # Critical Invariants
//!
//! 1. Every generated sequence is exactly 128 characters of '0'/'1'
//! 2. All randomness flows through an explicitly seeded [`SequenceRng`]
//! 3. The production path seeds once per generation from OS entropy

// Module declarations
pub mod analysis;
pub mod rng;
pub mod sequence;

// Re-exports for convenience
pub use analysis::{analyze, AnalysisError, RandomnessReport};
pub use rng::{EntropyError, SequenceRng};
pub use sequence::{
    generate, generate_from_entropy, BinarySequence, SEQUENCE_BITS, SEQUENCE_WORDS, WORD_BITS,
};
