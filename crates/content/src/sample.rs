//! Random exercise selection.

use rand::Rng;

use crate::bank::ContentBank;

/// Draws up to `k` distinct exercises for one block of a session.
///
/// Looks up `bank[discipline][age_group][block]`, shuffles it uniformly and
/// keeps the first `k`. Fewer than `k` candidates are all returned (in
/// random order); a missing path yields an empty list. The bank itself is
/// never modified.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use stride_content::{ContentBank, sample_exercises};
///
/// let bank = ContentBank::new().with_activities("Sprint", "7-9", 1, ["A", "B", "C", "D"]);
/// let mut rng = StdRng::seed_from_u64(1);
/// let picked = sample_exercises(&bank, "Sprint", "7-9", 1, 3, &mut rng);
/// assert_eq!(picked.len(), 3);
/// ```
pub fn sample_exercises(
    bank: &ContentBank,
    discipline: &str,
    age_group: &str,
    block: u8,
    k: usize,
    rng: &mut impl Rng,
) -> Vec<String> {
    let candidates = bank.activities(discipline, age_group, block);
    sample_without_replacement(candidates.len(), k, rng)
        .into_iter()
        .map(|i| candidates[i].clone())
        .collect()
}

/// Picks `min(k, n)` distinct indices from `0..n` in uniformly random order.
pub(crate) fn sample_without_replacement(n: usize, k: usize, rng: &mut impl Rng) -> Vec<usize> {
    // Fisher-Yates partial shuffle
    let mut pool: Vec<usize> = (0..n).collect();
    let k = k.min(n);
    for i in 0..k {
        let j = rng.random_range(i..n);
        pool.swap(i, j);
    }
    pool.truncate(k);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    #[test]
    fn indices_are_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in 0..12 {
            for k in 0..15 {
                let idx = sample_without_replacement(n, k, &mut rng);
                assert_eq!(idx.len(), k.min(n));
                let unique: BTreeSet<usize> = idx.iter().copied().collect();
                assert_eq!(unique.len(), idx.len());
                assert!(idx.iter().all(|&i| i < n));
            }
        }
    }

    #[test]
    fn full_draw_is_permutation() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut idx = sample_without_replacement(6, 6, &mut rng);
        idx.sort_unstable();
        assert_eq!(idx, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn every_position_equally_likely() {
        // Each of 4 items should lead the draw about a quarter of the time.
        let mut counts = [0usize; 4];
        let mut rng = StdRng::seed_from_u64(4242);
        for _ in 0..8000 {
            counts[sample_without_replacement(4, 2, &mut rng)[0]] += 1;
        }
        for &c in &counts {
            assert!((1700..=2300).contains(&c), "count {c} not near 2000");
        }
    }

    #[test]
    fn missing_block_is_empty() {
        let bank = ContentBank::new().with_activities("Sprint", "7-9", 1, ["A"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(sample_exercises(&bank, "Sprint", "7-9", 2, 3, &mut rng).is_empty());
        assert!(sample_exercises(&bank, "Spjut", "7-9", 1, 3, &mut rng).is_empty());
    }

    #[test]
    fn short_list_returned_whole() {
        let bank = ContentBank::new().with_activities("Sprint", "7-9", 1, ["A", "B"]);
        let mut rng = StdRng::seed_from_u64(0);
        let mut picked = sample_exercises(&bank, "Sprint", "7-9", 1, 3, &mut rng);
        picked.sort();
        assert_eq!(picked, vec!["A".to_string(), "B".to_string()]);
    }
}
