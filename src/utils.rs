//! Small helpers shared by the searches.

/// iterate on starting_value * 2**i (starting_value excluded)
pub(crate) fn powers(starting_value: usize) -> impl Iterator<Item = usize> {
    (0..).scan(starting_value, |state, _| {
        *state = state.checked_mul(2)?;
        Some(*state)
    })
}

/// Index of the middle of a range of given length.
#[inline]
pub(crate) fn middle(len: usize) -> usize {
    len / 2
}
