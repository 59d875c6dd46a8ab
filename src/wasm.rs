//! JavaScript bindings, enabled by the `wasm` feature.

use wasm_bindgen::prelude::wasm_bindgen;

/// See [`crate::longest_circular_palindrome`]. A missing string is treated as empty.
#[wasm_bindgen(js_name = longestCircularPalindrome)]
pub fn longest_circular_palindrome(s: Option<String>) -> String {
    crate::longest_circular_palindrome(s.as_deref())
}

/// See [`crate::longest_circular_palindrome_length`]. A missing string is treated as empty.
#[wasm_bindgen(js_name = longestCircularPalindromeLength)]
pub fn longest_circular_palindrome_length(s: Option<String>) -> usize {
    crate::longest_circular_palindrome_length(s.as_deref())
}

/// See [`crate::is_palindrome`].
#[wasm_bindgen(js_name = isPalindrome)]
pub fn is_palindrome(s: &str) -> bool {
    crate::is_palindrome(s)
}

/// See [`crate::first_missing_positive`].
#[wasm_bindgen(js_name = firstMissingPositive)]
pub fn first_missing_positive(nums: &[i32]) -> usize {
    crate::first_missing_positive(nums)
}

/// See [`crate::largest_sum_non_adjacent`].
#[wasm_bindgen(js_name = largestSumNonAdjacent)]
pub fn largest_sum_non_adjacent(nums: &[i32]) -> i64 {
    crate::largest_sum_non_adjacent(nums)
}
