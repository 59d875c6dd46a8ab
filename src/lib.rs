#![warn(missing_docs)]

//! # `circlet`
//!
//! Finds the longest palindrome hiding in any rotation of a string.
//! Call [`longest_circular_palindrome`] or [`longest_circular_palindrome_length`] for the common case, or configure a
//! [`CircularPalindromeFinder`] with a [`FinderBuilder`](builder::FinderBuilder) to search plain substrings instead or
//! to choose which palindrome is reported when several share the maximal length.
//!
//! A few small exercises from the same collection ride along: [`is_palindrome`] on a cleaned string,
//! [`first_missing_positive`] and [`largest_sum_non_adjacent`].
//!
//! # Internals
//! A window of some rotation of `S` is exactly a window of `S + S` that starts in the first copy and is no longer than
//! `S`. So rather than trying each of the `n` rotations, we run [Manacher's algorithm](https://en.wikipedia.org/wiki/Longest_palindromic_substring#Manacher's_algorithm)
//! once over the doubled string, which gives the longest palindrome about every centre in `O(n)` time.
//!
//! Two corrections map those palindromes back onto real windows:
//! 1. A palindrome of `S + S` longer than `n` would reuse characters from beyond one full turn.
//! Trimming it equally from both ends keeps it a palindrome, so it is cut down to `n` or `n - 1` characters, whichever
//! matches its parity.
//! 2. A palindrome starting at or after position `n` repeats the window one period earlier and is moved there.
//!
//! Characters are compared literally, as Unicode scalar values; nothing is stripped or case-folded.
//! [`reference::longest_circular_palindrome_naive`] is a cubic brute force kept around to test against.

pub use cleaned::is_palindrome;
pub use finder::CircularPalindromeFinder;
pub use missing_positive::first_missing_positive;
pub use non_adjacent::largest_sum_non_adjacent;
pub use span::{CircularSpan, SpanError};

pub mod builder;
pub(crate) mod cleaned;
pub(crate) mod finder;
pub(crate) mod missing_positive;
pub(crate) mod non_adjacent;
pub mod radii;
pub mod reference;
pub(crate) mod span;
mod tests;
#[cfg(feature = "wasm")]
pub mod wasm;

/// The longest palindrome among the windows of all rotations of `s`.
///
/// When several palindromes share the maximal length, the one about the earliest centre of `s + s` is returned.
/// An absent string (`None`) is treated as empty.
///
/// ```
/// assert_eq!(circlet::longest_circular_palindrome("aab"), "aba");
/// assert_eq!(circlet::longest_circular_palindrome(None::<&str>), "");
/// ```
pub fn longest_circular_palindrome<'a>(s: impl Into<Option<&'a str>>) -> String {
    CircularPalindromeFinder::default().find(s.into().unwrap_or_default())
}

/// Length, in [`char`]s, of [`longest_circular_palindrome`].
pub fn longest_circular_palindrome_length<'a>(s: impl Into<Option<&'a str>>) -> usize {
    CircularPalindromeFinder::default().find_len(s.into().unwrap_or_default())
}
