//! Shuffle Engine
//!
//! Fisher-Yates over an index array driven by the counter-mode draw
//! stream. The engine never mutates caller input and never inspects the
//! elements it reorders.

use super::rng::CounterModeRng;
use super::seed::{Seed, SeedError};

/// Seeded Fisher-Yates permutation of an index array.
///
/// Operates on a copy; the input slice is never mutated. For `i` from
/// `len - 1` down to 1: draw `r` in [0, 1], `j = floor(r * (i + 1))`,
/// swap positions `i` and `j`. The one-in-2^32 draw where `r == 1.0`
/// would index past `i`, so `j` is clamped; the counter still advances.
pub fn shuffle_indices(indices: &[usize], seed: &Seed) -> Vec<usize> {
    let mut out = indices.to_vec();
    let mut rng = CounterModeRng::new(seed);

    for i in (1..out.len()).rev() {
        let r = rng.next_f64();
        let j = ((r * (i as f64 + 1.0)).floor() as usize).min(i);
        out.swap(i, j);
    }

    out
}

/// Seeded shuffle of an arbitrary value sequence.
///
/// Shuffles a parallel `0..len` index array and re-indexes, keeping the
/// permutation logic decoupled from the element type.
pub fn shuffle_values<T: Clone>(values: &[T], seed: &Seed) -> Vec<T> {
    let identity: Vec<usize> = (0..values.len()).collect();
    shuffle_indices(&identity, seed)
        .into_iter()
        .map(|i| values[i].clone())
        .collect()
}

/// Deck-module entry point: shuffle with a textual seed.
///
/// Fails with [`SeedError::InvalidFormat`] if the seed text is not
/// 64 hex characters.
pub fn shuffle_with_seed<T: Clone>(deck: &[T], seed_text: &str) -> Result<Vec<T>, SeedError> {
    let seed = Seed::parse(seed_text)?;
    Ok(shuffle_values(deck, &seed))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn zero_seed() -> Seed {
        Seed::parse(&"0".repeat(64)).unwrap()
    }

    #[test]
    fn test_golden_permutation() {
        // Regression fixture from the first correct implementation.
        // Must be bit-for-bit reproducible on every platform, forever.
        let deck: Vec<usize> = (0..5).collect();
        assert_eq!(shuffle_indices(&deck, &zero_seed()), vec![3, 2, 4, 0, 1]);

        let deck: Vec<usize> = (0..10).collect();
        assert_eq!(
            shuffle_indices(&deck, &zero_seed()),
            vec![2, 5, 6, 9, 8, 0, 7, 4, 1, 3]
        );
    }

    #[test]
    fn test_shuffle_determinism() {
        let deck: Vec<u8> = (0..52).collect();
        let seed = Seed::parse(&"a".repeat(64)).unwrap();

        assert_eq!(shuffle_values(&deck, &seed), shuffle_values(&deck, &seed));
    }

    #[test]
    fn test_input_not_mutated() {
        let deck: Vec<u8> = (0..52).collect();
        let before = deck.clone();
        let _ = shuffle_values(&deck, &zero_seed());
        assert_eq!(deck, before);
    }

    #[test]
    fn test_values_follow_index_permutation() {
        let values = ["ace", "king", "queen", "jack", "ten"];
        let shuffled = shuffle_values(&values, &zero_seed());

        let identity: Vec<usize> = (0..values.len()).collect();
        let order = shuffle_indices(&identity, &zero_seed());
        let expected: Vec<&str> = order.into_iter().map(|i| values[i]).collect();

        assert_eq!(shuffled, expected);
    }

    #[test]
    fn test_shuffle_with_seed_rejects_bad_seed() {
        let deck = [0, 1, 2];
        assert!(matches!(
            shuffle_with_seed(&deck, "short"),
            Err(SeedError::InvalidFormat { .. })
        ));
        assert!(matches!(
            shuffle_with_seed(&deck, "not-hex"),
            Err(SeedError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_empty_and_single_element() {
        let empty: Vec<u8> = vec![];
        assert!(shuffle_values(&empty, &zero_seed()).is_empty());

        let one = [7u8];
        assert_eq!(shuffle_values(&one, &zero_seed()), vec![7]);
    }

    #[test]
    fn test_distribution_sanity() {
        // Over 1000 shuffles of a 10-element deck with independent
        // random seeds, each element's final-position frequency should
        // be roughly uniform: expected 100 per cell, reject past 3x.
        const ROUNDS: usize = 1000;
        const LEN: usize = 10;

        let deck: Vec<usize> = (0..LEN).collect();
        let mut counts = [[0usize; LEN]; LEN];

        for _ in 0..ROUNDS {
            let seed = Seed::generate().unwrap();
            let shuffled = shuffle_values(&deck, &seed);
            for (pos, &element) in shuffled.iter().enumerate() {
                counts[element][pos] += 1;
            }
        }

        let cap = 3 * ROUNDS / LEN;
        for element in 0..LEN {
            for pos in 0..LEN {
                assert!(
                    counts[element][pos] < cap,
                    "element {} landed at position {} {} times (cap {})",
                    element,
                    pos,
                    counts[element][pos],
                    cap
                );
            }
        }
    }

    proptest! {
        #[test]
        fn prop_output_is_permutation(
            deck in proptest::collection::vec(any::<u16>(), 0..64),
            seed_bytes in proptest::array::uniform32(any::<u8>()),
        ) {
            let seed = Seed::parse(&hex::encode(seed_bytes)).unwrap();
            let shuffled = shuffle_values(&deck, &seed);

            let mut expected = deck.clone();
            let mut got = shuffled.clone();
            expected.sort_unstable();
            got.sort_unstable();

            // Same multiset of elements
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn prop_deterministic(
            deck in proptest::collection::vec(any::<u16>(), 0..64),
            seed_bytes in proptest::array::uniform32(any::<u8>()),
        ) {
            let seed = Seed::parse(&hex::encode(seed_bytes)).unwrap();
            prop_assert_eq!(
                shuffle_values(&deck, &seed),
                shuffle_values(&deck, &seed)
            );
        }
    }
}
