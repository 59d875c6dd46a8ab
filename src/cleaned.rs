use itertools::Itertools;

/// Whether `s` reads the same both ways once everything but ASCII letters and digits is dropped and case is ignored.
///
/// A string with nothing left after cleaning, including the empty string, is a palindrome.
///
/// ```
/// assert!(circlet::is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!circlet::is_palindrome("race a car"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let cleaned = s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect_vec();

    let (mut left, mut right) = (0, cleaned.len());
    while left + 1 < right {
        if cleaned[left] != cleaned[right - 1] {
            return false;
        }
        left += 1;
        right -= 1;
    }

    true
}
