use std::collections::HashSet;

/// The smallest positive integer that does not occur in `nums`.
///
/// Zero and negative values are ignored. The answer is at most `nums.len() + 1`.
///
/// ```
/// assert_eq!(circlet::first_missing_positive(&[3, 4, -1, 1]), 2);
/// ```
pub fn first_missing_positive(nums: &[i32]) -> usize {
    let seen: HashSet<usize> = nums.iter()
        .filter_map(|&num| usize::try_from(num).ok())
        .filter(|&num| num > 0)
        .collect();

    // n values can cover at most 1..=n
    (1..=nums.len() + 1)
        .find(|candidate| !seen.contains(candidate))
        .unwrap_or(nums.len() + 1)
}
