/// The largest sum of a subset of `nums` in which no two chosen elements are adjacent.
///
/// The empty subset is allowed, so the result is never negative. Sums are taken in `i64` and cannot overflow.
///
/// ```
/// assert_eq!(circlet::largest_sum_non_adjacent(&[2, 4, 6, 2, 5]), 13);
/// ```
pub fn largest_sum_non_adjacent(nums: &[i32]) -> i64 {
    // best sums over the prefix ending two elements back and one element back
    let (mut two_back, mut one_back) = (0i64, 0i64);

    for &num in nums {
        let here = one_back.max(two_back + i64::from(num));
        two_back = one_back;
        one_back = here;
    }

    one_back
}
