//! Manacher palindrome radii over arbitrary sequences.

use std::cmp::min;

/// Palindrome radii around every centre of a sequence, as computed by Manacher's algorithm.
///
/// Odd centres sit on an element. `odd()[i]` counts the elements on each side of position `i`, the centre included,
/// so a lone element has radius 1 and the palindrome centred there spans `2 * odd()[i] - 1` elements.
///
/// Even centres sit between two elements. `even()[i]` is the radius of the longest even palindrome whose right half
/// starts at `i`, which spans `2 * even()[i]` elements. It is 0 when `seq[i - 1] != seq[i]` (and always at `i == 0`).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Radii {
    odd: Vec<usize>,
    even: Vec<usize>,
}

impl Radii {
    /// Compute the radii of `seq` in `O(seq.len())` time.
    pub fn of<T: Eq>(seq: &[T]) -> Self {
        Self {
            odd: odd_radii(seq),
            even: even_radii(seq),
        }
    }

    /// Length of the sequence these radii were computed over.
    pub fn len(&self) -> usize {
        self.odd.len()
    }

    /// Whether the sequence was empty.
    pub fn is_empty(&self) -> bool {
        self.odd.is_empty()
    }

    /// Radii of the odd-length palindromes, indexed by centre.
    pub fn odd(&self) -> &[usize] {
        &self.odd
    }

    /// Radii of the even-length palindromes, indexed by the start of their right half.
    pub fn even(&self) -> &[usize] {
        &self.even
    }

    /// The longest palindrome about every centre, as `(start, len)` pairs in increasing order of centre.
    ///
    /// The even centre just left of position `i` is yielded before the odd centre on `i`.
    /// Even centres with no palindrome about them are skipped.
    pub fn centres(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.odd.iter()
            .zip(&self.even)
            .enumerate()
            .flat_map(|(i, (&odd, &even))| {
                let around_gap = (even > 0).then(|| (i - even, 2 * even));
                let around_element = (i + 1 - odd, 2 * odd - 1);
                around_gap.into_iter().chain([around_element])
            })
    }
}

fn odd_radii<T: Eq>(seq: &[T]) -> Vec<usize> {
    let n = seq.len();
    let mut radius = vec![0; n];
    // the rightmost-reaching palindrome found so far occupies [left, right)
    let (mut left, mut right) = (0, 0);

    for i in 0..n {
        let mut k = if i < right {
            // mirror about the centre of [left, right), capped so we never claim past the boundary
            min(radius[left + right - 1 - i], right - i)
        } else {
            1
        };

        while i + k < n && k <= i && seq[i + k] == seq[i - k] {
            k += 1;
        }

        radius[i] = k;
        if i + k > right {
            left = i + 1 - k;
            right = i + k;
        }
    }

    radius
}

fn even_radii<T: Eq>(seq: &[T]) -> Vec<usize> {
    let n = seq.len();
    let mut radius = vec![0; n];
    let (mut left, mut right) = (0, 0);

    for i in 0..n {
        let mut k = if i < right {
            min(radius[left + right - i], right - i)
        } else {
            0
        };

        while i + k < n && k < i && seq[i + k] == seq[i - k - 1] {
            k += 1;
        }

        radius[i] = k;
        if i + k > right {
            left = i - k;
            right = i + k;
        }
    }

    radius
}
