//! Randomness tests over binary sequences
//!
//! Three tests in the NIST SP 800-22 family, each producing a p-value:
//! frequency (monobit), runs, and longest-run-of-ones in 8-bit blocks.
//! A p-value below the chosen significance level marks the sequence as
//! non-random with respect to that test.
//!
//! Inputs are '0'/'1' strings; anything else is rejected up front with an
//! [`AnalysisError`].

mod special;

use serde::Serialize;
use thiserror::Error;

use special::{erfc, igamc_three_halves};

/// Block length for the longest-run test (NIST M = 8, valid for n ≥ 128).
const BLOCK_LENGTH: usize = 8;

/// Expected proportions of 8-bit blocks whose longest run of ones falls in
/// the categories {≤1, 2, 3, ≥4} under the randomness hypothesis.
const LONGEST_RUN_PI: [f64; 4] = [0.2148, 0.3672, 0.2305, 0.1875];

/// Minimum sequence length accepted by the longest-run test.
const LONGEST_RUN_MIN_BITS: usize = 128;

/// Errors raised when a sequence cannot be analyzed
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("sequence is empty")]
    EmptySequence,

    #[error("invalid character {found:?} at position {position}; sequences contain only '0' and '1'")]
    InvalidCharacter { position: usize, found: char },

    #[error("sequence length {length} is below the minimum {minimum} for this test")]
    SequenceTooShort { length: usize, minimum: usize },

    #[error("sequence length {length} is not a multiple of the block length {block}")]
    BlockMisaligned { length: usize, block: usize },
}

/// p-values of the three tests over one sequence
///
/// # Example
/// ```
/// use bitseq_core::{analyze, sequence, SequenceRng};
///
/// let mut rng = SequenceRng::from_seed(42);
/// let seq = sequence::generate(&mut rng);
/// let report = analyze(seq.as_str()).expect("generated sequences are well-formed");
/// assert!(report.frequency_p >= 0.0 && report.frequency_p <= 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RandomnessReport {
    /// Frequency (monobit) test p-value
    pub frequency_p: f64,
    /// Runs test p-value
    pub runs_p: f64,
    /// Longest-run-of-ones test p-value
    pub longest_run_p: f64,
}

impl RandomnessReport {
    /// True when every p-value clears the significance level.
    pub fn passes(&self, alpha: f64) -> bool {
        self.frequency_p >= alpha && self.runs_p >= alpha && self.longest_run_p >= alpha
    }
}

/// Run all three tests over one sequence.
pub fn analyze(sequence: &str) -> Result<RandomnessReport, AnalysisError> {
    Ok(RandomnessReport {
        frequency_p: frequency_test(sequence)?,
        runs_p: runs_test(sequence)?,
        longest_run_p: longest_run_test(sequence)?,
    })
}

/// Frequency (monobit) test.
///
/// Measures how far the ±1-weighted bit sum drifts from zero:
/// `s_obs = |Σ(2·bit − 1)| / √n`, `p = erfc(s_obs / √2)`.
pub fn frequency_test(sequence: &str) -> Result<f64, AnalysisError> {
    let bits = validate(sequence)?;
    let n = bits.len() as f64;
    let sum: i64 = bits.iter().map(|&b| if b == b'1' { 1 } else { -1 }).sum();
    let s_obs = (sum as f64).abs() / n.sqrt();
    Ok(erfc(s_obs / std::f64::consts::SQRT_2))
}

/// Runs test.
///
/// Counts maximal runs of identical bits. A sequence that already fails the
/// frequency precondition `|π − 1/2| < 2/√n` short-circuits to p = 0.
pub fn runs_test(sequence: &str) -> Result<f64, AnalysisError> {
    let bits = validate(sequence)?;
    let n = bits.len() as f64;
    let ones = bits.iter().filter(|&&b| b == b'1').count() as f64;
    let proportion = ones / n;

    if (proportion - 0.5).abs() >= 2.0 / n.sqrt() {
        return Ok(0.0);
    }

    // Total runs = transitions + 1
    let runs = bits.windows(2).filter(|pair| pair[0] != pair[1]).count() as f64 + 1.0;
    let expected = 2.0 * n * proportion * (1.0 - proportion);
    let denom = 2.0 * (2.0 * n).sqrt() * proportion * (1.0 - proportion);
    Ok(erfc((runs - expected).abs() / denom))
}

/// Longest-run-of-ones test over 8-bit blocks.
///
/// Buckets each block by its longest run of ones ({≤1, 2, 3, ≥4}), compares
/// against the expected proportions with a χ² statistic, and reads the
/// p-value from the regularized upper incomplete gamma Q(3/2, χ²/2).
///
/// Requires at least 128 bits and a length divisible by the block length.
pub fn longest_run_test(sequence: &str) -> Result<f64, AnalysisError> {
    let bits = validate(sequence)?;
    if bits.len() < LONGEST_RUN_MIN_BITS {
        return Err(AnalysisError::SequenceTooShort {
            length: bits.len(),
            minimum: LONGEST_RUN_MIN_BITS,
        });
    }
    if bits.len() % BLOCK_LENGTH != 0 {
        return Err(AnalysisError::BlockMisaligned {
            length: bits.len(),
            block: BLOCK_LENGTH,
        });
    }

    let mut counts = [0usize; 4];
    for block in bits.chunks(BLOCK_LENGTH) {
        let mut longest = 0usize;
        let mut current = 0usize;
        for &bit in block {
            if bit == b'1' {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }
        let category = match longest {
            0 | 1 => 0,
            2 => 1,
            3 => 2,
            _ => 3,
        };
        counts[category] += 1;
    }

    let blocks = (bits.len() / BLOCK_LENGTH) as f64;
    let chi_square: f64 = counts
        .iter()
        .zip(LONGEST_RUN_PI.iter())
        .map(|(&observed, &pi)| {
            let expected = blocks * pi;
            (observed as f64 - expected).powi(2) / expected
        })
        .sum();

    Ok(igamc_three_halves(chi_square / 2.0))
}

fn validate(sequence: &str) -> Result<&[u8], AnalysisError> {
    if sequence.is_empty() {
        return Err(AnalysisError::EmptySequence);
    }
    for (position, found) in sequence.chars().enumerate() {
        if found != '0' && found != '1' {
            return Err(AnalysisError::InvalidCharacter { position, found });
        }
    }
    Ok(sequence.as_bytes())
}
