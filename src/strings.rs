//! Small character-counting and rewriting problems.

use itertools::Itertools;

/// How many characters of `stones` are jewels, where `jewels` names the jewel
/// characters (case-sensitive).
///
/// Builds a frequency map of the stones once, so repeated jewel characters do
/// not double-count the same stone.
#[must_use]
pub fn num_jewels_in_stones(jewels: &str, stones: &str) -> usize {
    let stone_counts = stones.chars().counts();
    jewels
        .chars()
        .unique()
        .filter_map(|jewel| stone_counts.get(&jewel))
        .sum()
}

/// Replaces every `.` in an IP address with `[.]` so the string no longer
/// parses as an address.
#[must_use]
pub fn defang_ip_addr(address: &str) -> String {
    address.replace('.', "[.]")
}

#[cfg(test)]
mod tests {
    use crate::strings::{defang_ip_addr, num_jewels_in_stones};

    #[test]
    fn jewel_counting() {
        assert_eq!(num_jewels_in_stones("aA", "aAAbbbb"), 3);
        assert_eq!(num_jewels_in_stones("z", "ZZ"), 0);
        assert_eq!(num_jewels_in_stones("", "abc"), 0);
        assert_eq!(num_jewels_in_stones("abc", ""), 0);
    }

    #[test]
    fn duplicate_jewels_do_not_double_count() {
        assert_eq!(num_jewels_in_stones("aa", "aaa"), 3);
    }

    #[test]
    fn defanging() {
        assert_eq!(defang_ip_addr("1.1.1.1"), "1[.]1[.]1[.]1");
        assert_eq!(defang_ip_addr("255.100.50.0"), "255[.]100[.]50[.]0");
        assert_eq!(defang_ip_addr("localhost"), "localhost");
    }
}
