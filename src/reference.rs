//! Brute-force circular palindrome search.
//!
//! Enumerates every window of every rotation and checks each one directly, which costs `O(n³)`.
//! Useful only as an oracle to check [`CircularPalindromeFinder`](crate::CircularPalindromeFinder) against.

use itertools::Itertools;

/// Rotate `s` left by `k` characters, wrapping `k` modulo the length of `s`.
///
/// ```
/// assert_eq!(circlet::reference::rotate("abc", 1), "bca");
/// ```
pub fn rotate(s: &str, k: usize) -> String {
    let chars = s.chars().collect_vec();
    if chars.is_empty() {
        return String::new();
    }

    let k = k % chars.len();
    chars[k..].iter().chain(&chars[..k]).collect()
}

fn reads_same_reversed<T: Eq>(window: &[T]) -> bool {
    let (mut left, mut right) = (0, window.len());
    while left + 1 < right {
        if window[left] != window[right - 1] {
            return false;
        }
        left += 1;
        right -= 1;
    }

    true
}

/// Longest palindromic window over all rotations of `s`, found by checking every window.
///
/// Windows are tried by increasing rotation, then increasing length; the first of maximal length wins.
pub fn longest_circular_palindrome_naive(s: &str) -> String {
    let chars = s.chars().collect_vec();
    let n = chars.len();
    let doubled = chars.iter().chain(&chars).copied().collect_vec();

    (0..n).cartesian_product(1..=n)
        .map(|(rotation, len)| &doubled[rotation..rotation + len])
        .filter(|window| reads_same_reversed(*window))
        .fold(&doubled[..0], |best, window| if window.len() > best.len() { window } else { best })
        .iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{longest_circular_palindrome_naive, reads_same_reversed, rotate};

    #[test]
    fn rotations() {
        assert_eq!(rotate("", 3), "");
        assert_eq!(rotate("abc", 0), "abc");
        assert_eq!(rotate("abc", 2), "cab");
        assert_eq!(rotate("abc", 4), "bca");
        assert_eq!(rotate("a牛c", 1), "牛ca");
    }

    #[test]
    fn palindrome_check() {
        assert!(reads_same_reversed::<char>(&[]));
        assert!(reads_same_reversed(&['x']));
        assert!(reads_same_reversed(&['x', 'y', 'x']));
        assert!(reads_same_reversed(&['x', 'x']));
        assert!(!reads_same_reversed(&['x', 'y']));
    }

    #[test]
    fn naive_search() {
        assert_eq!(longest_circular_palindrome_naive(""), "");
        assert_eq!(longest_circular_palindrome_naive("a"), "a");
        assert_eq!(longest_circular_palindrome_naive("aab"), "aba");
        assert_eq!(longest_circular_palindrome_naive("abcba"), "abcba");
        assert_eq!(longest_circular_palindrome_naive("abcd"), "a");
        assert_eq!(longest_circular_palindrome_naive("aaa"), "aaa");
    }
}
