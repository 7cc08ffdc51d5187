//! Fuzzing entry point: turn an opaque byte buffer into two sorted inputs
//! and check every merge on them.
use crate::check::{check_all, CheckError};

/// Decode a fuzzer buffer as little-endian `i32` words.
///
/// The first word picks the size of the left input (modulo the number of
/// remaining words plus one), the remaining words are split accordingly and
/// each side is sorted. Trailing bytes not filling a word are ignored.
/// Returns `None` when there is not even one word.
///
/// # Example
///
/// ```
/// use biased_merge::fuzz::decode;
/// let words: Vec<u8> = [1i32, 7, 3, 5].iter().flat_map(|w| w.to_le_bytes()).collect();
/// assert_eq!(decode(&words), Some((vec![7], vec![3, 5])));
/// assert_eq!(decode(&[0, 1, 2]), None);
/// ```
pub fn decode(data: &[u8]) -> Option<(Vec<i32>, Vec<i32>)> {
    let mut words = data
        .chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    let first = words.next()?;
    let mut rest: Vec<i32> = words.collect();
    let lhs_size = (first as i64).rem_euclid(rest.len() as i64 + 1) as usize;
    let mut rhs = rest.split_off(lhs_size);
    let mut lhs = rest;
    lhs.sort();
    rhs.sort();
    Some((lhs, rhs))
}

/// Check all merges on the inputs decoded from `data`.
/// Buffers too short to decode are accepted.
pub fn run_one_input(data: &[u8]) -> Result<(), CheckError> {
    match decode(data) {
        Some((lhs, rhs)) => check_all(&lhs, &rhs),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(words: &[i32]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes().to_vec()).collect()
    }

    #[test]
    fn negative_split_word_wraps_around() {
        // -1 modulo 4 is 3: everything goes left
        assert_eq!(decode(&bytes(&[-1, 7, 3, 5])), Some((vec![3, 5, 7], vec![])));
        assert_eq!(decode(&bytes(&[-4, 7, 3, 5])), Some((vec![], vec![3, 5, 7])));
        assert_eq!(
            decode(&bytes(&[i32::MIN, 2, 1])),
            Some((vec![2], vec![1]))
        );
    }

    #[test]
    fn single_word_gives_empty_sides() {
        assert_eq!(decode(&bytes(&[9])), Some((vec![], vec![])));
        assert_eq!(decode(&bytes(&[-9])), Some((vec![], vec![])));
        assert_eq!(decode(&[]), None);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut data = bytes(&[1, 7, 3, 5]);
        data.extend_from_slice(&[0xff, 0xff, 0xff]);
        assert_eq!(decode(&data), Some((vec![7], vec![3, 5])));
    }

    #[test]
    fn run_one_input_accepts_valid_buffers() {
        assert_eq!(run_one_input(&[]), Ok(()));
        assert_eq!(run_one_input(&[1, 2, 3]), Ok(()));
        assert_eq!(run_one_input(&bytes(&[2, 4, 4, 1, 4, 4])), Ok(()));
        let ties: Vec<i32> = (0..500).map(|i| i % 3).collect();
        let mut words = vec![-250];
        words.extend(ties);
        assert_eq!(run_one_input(&bytes(&words)), Ok(()));
    }
}
