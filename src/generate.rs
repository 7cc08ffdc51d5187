//! Synthetic sorted inputs for tests and benchmarks.
use itertools::Itertools;
use rand::Rng;
use std::collections::BTreeSet;

/// `len` random values in `0..max`, sorted.
pub fn sorted_random<R: Rng>(rng: &mut R, len: usize, max: u32) -> Vec<u32> {
    let mut v: Vec<u32> = (0..len).map(|_| rng.gen_range(0..max.max(1))).collect();
    v.sort();
    v
}

/// Split `total` random values in `0..max` at a random point,
/// then sort each side.
pub fn random_split<R: Rng>(rng: &mut R, total: usize, max: u32) -> (Vec<u32>, Vec<u32>) {
    let lhs_size = rng.gen_range(0..=total);
    (
        sorted_random(rng, lhs_size, max),
        sorted_random(rng, total - lhs_size, max),
    )
}

/// Even values on the left, odd ones on the right: every element of the
/// merge switches side.
pub fn interleaved(input_size: u32) -> (Vec<u32>, Vec<u32>) {
    (0..input_size).tuples::<(u32, u32)>().unzip()
}

/// `run` consecutive values on the left, `others` values spread over the
/// same range on the right: the left side wins long runs.
pub fn long_runs(run: u32, others: u32) -> (Vec<u32>, Vec<u32>) {
    let left = (0..run).collect();
    let gap = (run / others.max(1)).max(1);
    let right = (0..others).map(|i| i * gap + gap / 2).collect();
    (left, right)
}

/// `len` distinct sorted values in `1..=len * 10`.
pub fn unique_sorted<R: Rng>(rng: &mut R, len: usize) -> Vec<i64> {
    let max = (len as i64).saturating_mul(10).max(1);
    let mut values = BTreeSet::new();
    while values.len() < len {
        values.insert(rng.gen_range(1..=max));
    }
    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_inputs_are_sorted() {
        let mut rng = StdRng::seed_from_u64(42);
        let (lhs, rhs) = random_split(&mut rng, 100, 10);
        assert_eq!(lhs.len() + rhs.len(), 100);
        assert!(lhs.windows(2).all(|w| w[0] <= w[1]));
        assert!(rhs.windows(2).all(|w| w[0] <= w[1]));
        let unique = unique_sorted(&mut rng, 50);
        assert!(unique.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn interleaved_halves() {
        let (lhs, rhs) = interleaved(6);
        assert_eq!(lhs, vec![0, 2, 4]);
        assert_eq!(rhs, vec![1, 3, 5]);
    }

    #[test]
    fn long_runs_spread_others() {
        let (lhs, rhs) = long_runs(1000, 4);
        assert_eq!(lhs.len(), 1000);
        assert_eq!(rhs, vec![125, 375, 625, 875]);
    }
}
