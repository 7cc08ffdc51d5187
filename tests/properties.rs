use biased_merge::check::check_all;
use biased_merge::oracle::{itertools_merge_by, naive_merge_by};
use biased_merge::{merge_biased, merge_linear};
use proptest::prelude::*;

fn sorted(max_len: usize, max_value: u16) -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(0..max_value, 0..max_len).prop_map(|mut v| {
        v.sort();
        v
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn merges_agree_with_oracle(lhs in sorted(300, 50), rhs in sorted(300, 50)) {
        prop_assert_eq!(check_all(&lhs, &rhs), Ok(()));
    }

    #[test]
    fn output_is_sorted_permutation(lhs in sorted(200, 1000), rhs in sorted(200, 1000)) {
        let mut linear = vec![0; lhs.len() + rhs.len()];
        let mut biased = linear.clone();
        prop_assert_eq!(merge_linear(&lhs, &rhs, &mut linear), lhs.len() + rhs.len());
        prop_assert_eq!(merge_biased(&lhs, &rhs, &mut biased), lhs.len() + rhs.len());
        let mut all: Vec<u16> = lhs.iter().chain(rhs.iter()).cloned().collect();
        all.sort();
        prop_assert_eq!(&linear, &all);
        prop_assert_eq!(&biased, &all);
    }

    #[test]
    fn long_runs_against_few_values(
        run in 0usize..5000,
        others in sorted(8, 6000),
        swap in any::<bool>(),
    ) {
        let long: Vec<u16> = (0..run as u16).collect();
        let (lhs, rhs) = if swap { (&others, &long) } else { (&long, &others) };
        prop_assert_eq!(check_all(lhs, rhs), Ok(()));
    }

    #[test]
    fn oracles_agree(lhs in sorted(100, 10), rhs in sorted(100, 10)) {
        let key = |a: &u16, b: &u16| a / 2 < b / 2;
        prop_assert_eq!(naive_merge_by(&lhs, &rhs, key), itertools_merge_by(&lhs, &rhs, key));
    }
}
