//! Seeded random number generation
//!
//! CRITICAL: All randomness in the generator MUST go through this module.
//! Same seed → same stream of draws, which keeps generation reproducible in
//! tests while the production path seeds from OS entropy.

mod engine;

pub use engine::{EntropyError, SequenceRng};
