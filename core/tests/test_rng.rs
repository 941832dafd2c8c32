//! Tests for the seeded random engine

use bitseq_core::SequenceRng;

#[test]
fn test_same_seed_same_stream() {
    let mut a = SequenceRng::from_seed(12345);
    let mut b = SequenceRng::from_seed(12345);

    for _ in 0..1000 {
        assert_eq!(a.next_word(), b.next_word());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = SequenceRng::from_seed(1);
    let mut b = SequenceRng::from_seed(2);

    let a_words: Vec<u64> = (0..4).map(|_| a.next_word()).collect();
    let b_words: Vec<u64> = (0..4).map(|_| b.next_word()).collect();
    assert_ne!(a_words, b_words);
}

#[test]
fn test_seed_is_observable() {
    let rng = SequenceRng::from_seed(99);
    assert_eq!(rng.seed(), 99);
}

#[test]
fn test_entropy_seeding_is_replayable() {
    let mut rng = SequenceRng::from_entropy().expect("entropy source available");
    let mut replay = SequenceRng::from_seed(rng.seed());

    for _ in 0..10 {
        assert_eq!(rng.next_word(), replay.next_word());
    }
}

#[test]
fn test_entropy_engines_are_independent() {
    let mut a = SequenceRng::from_entropy().expect("entropy source available");
    let mut b = SequenceRng::from_entropy().expect("entropy source available");

    // 256 bits from each; identical streams would mean the OS handed out
    // the same seed twice.
    let a_words: Vec<u64> = (0..4).map(|_| a.next_word()).collect();
    let b_words: Vec<u64> = (0..4).map(|_| b.next_word()).collect();
    assert_ne!(a_words, b_words);
}

#[test]
fn test_cloned_engine_continues_the_stream() {
    let mut original = SequenceRng::from_seed(555);
    original.next_word();

    let mut fork = original.clone();
    assert_eq!(original.next_word(), fork.next_word());
}
