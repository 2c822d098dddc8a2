//! Positional comparison of small integer sequences.

/// Number of positions at which `guess` and `answer` hold the same value,
/// compared over their common prefix.
#[must_use]
pub fn count_position_matches(guess: &[i32], answer: &[i32]) -> usize {
    guess
        .iter()
        .zip(answer)
        .filter(|(g, a)| g == a)
        .count()
}

#[cfg(test)]
mod tests {
    use crate::arrays::count_position_matches;

    #[test]
    fn counts_matching_positions() {
        assert_eq!(count_position_matches(&[1, 2, 3], &[1, 2, 3]), 3);
        assert_eq!(count_position_matches(&[2, 2, 3], &[3, 2, 1]), 1);
        assert_eq!(count_position_matches(&[1, 1, 1], &[2, 2, 2]), 0);
    }

    #[test]
    fn only_the_common_prefix_counts() {
        assert_eq!(count_position_matches(&[1, 2], &[1, 2, 3]), 2);
        assert_eq!(count_position_matches(&[], &[1, 2, 3]), 0);
    }
}
