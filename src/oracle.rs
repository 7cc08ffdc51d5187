//! Reference merges the fast algorithms are checked against.
use itertools::Itertools;

/// Plain index based stable merge, one branch per output element.
pub fn naive_merge_by<T, F>(lhs: &[T], rhs: &[T], mut less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let sizes = [lhs.len(), rhs.len()];
    let inputs = [lhs, rhs];
    let mut indices = [0usize; 2];
    let mut output = Vec::with_capacity(lhs.len() + rhs.len());
    for _ in 0..lhs.len() + rhs.len() {
        let direction = if indices[0] >= sizes[0] {
            1
        } else if indices[1] >= sizes[1] {
            0
        } else if less(&inputs[1][indices[1]], &inputs[0][indices[0]]) {
            1
        } else {
            0
        };
        output.push(inputs[direction][indices[direction]].clone());
        indices[direction] += 1;
    }
    output
}

/// Stable merge through itertools.
pub fn itertools_merge_by<T, F>(lhs: &[T], rhs: &[T], mut less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    lhs.iter()
        .merge_by(rhs.iter(), |l: &&T, r: &&T| !less(r, l))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracles_agree_on_ties() {
        let lhs = [(1, 'l'), (3, 'l'), (3, 'l')];
        let rhs = [(2, 'r'), (3, 'r')];
        let expected = vec![(1, 'l'), (2, 'r'), (3, 'l'), (3, 'l'), (3, 'r')];
        assert_eq!(naive_merge_by(&lhs, &rhs, |a, b| a.0 < b.0), expected);
        assert_eq!(itertools_merge_by(&lhs, &rhs, |a, b| a.0 < b.0), expected);
    }
}
