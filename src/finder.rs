use itertools::Itertools;
use log::{debug, trace};

use crate::builder::{TieBreak, Topology};
use crate::radii::Radii;
use crate::span::CircularSpan;

/// Finds the longest palindrome among the windows of every rotation of a sequence.
///
/// Rather than materialising each rotation, the finder searches the sequence doubled (`S + S`), in which every window
/// of every rotation appears starting within the first copy. Palindrome radii over the doubled sequence are computed
/// in linear time (see [`Radii`]), and each maximal palindrome is then fitted back into one period:
///
/// 1. A palindrome longer than the sequence is not a window of any rotation. It is shrunk symmetrically about its
///    centre to the longest length not exceeding the period with the same parity.
/// 2. A palindrome starting in the second copy is a repeat of the same window starting one period earlier, so its
///    start is rebased into the first copy.
///
/// Build one with a [`FinderBuilder`](crate::builder::FinderBuilder), or use [`Default`] for a circular search that
/// keeps the first maximal palindrome.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CircularPalindromeFinder {
    topology: Topology,
    tie_break: TieBreak,
}

impl CircularPalindromeFinder {
    pub(crate) fn new(topology: Topology, tie_break: TieBreak) -> Self {
        Self { topology, tie_break }
    }

    /// The windows this finder searches.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// How this finder breaks ties.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Locate the longest palindromic window of `seq`, in `O(seq.len())` time and space.
    ///
    /// Elements are compared literally; nothing is normalised. The empty sequence yields [`CircularSpan::empty`].
    pub fn find_span<T: Eq>(&self, seq: &[T]) -> CircularSpan {
        let period = seq.len();
        if period == 0 {
            return CircularSpan::empty();
        }

        let haystack = match self.topology {
            Topology::Circular => seq.iter().chain(seq).collect_vec(),
            Topology::Linear => seq.iter().collect_vec(),
        };
        let radii = Radii::of(&haystack);

        let mut best: Option<(usize, usize)> = None;
        for (start, len) in radii.centres() {
            let (start, len) = fit_to_period(start, len, period);
            let better = match best {
                None => true,
                Some((_, best_len)) => match self.tie_break {
                    TieBreak::FirstCentre => len > best_len,
                    TieBreak::LastCentre => len >= best_len,
                },
            };
            if better {
                best = Some((start, len));
            }
        }

        // every element is a palindrome of its own, so a non-empty sequence always has a candidate
        let (mut start, len) = best.unwrap_or((0, 0));
        if start >= period {
            trace!("rebasing palindrome at {start} of the doubled sequence by one period of {period}");
            start -= period;
        }
        debug!("longest {} palindrome over a period of {period} starts at {start} with length {len}", self.topology);

        match CircularSpan::new(period, start, len) {
            Ok(span) => span,
            Err(err) => unreachable!("palindrome fitted to its period was rejected: {err}"),
        }
    }

    /// The longest palindrome among the windows of the rotations of `s`, counted in [`char`]s.
    ///
    /// ```
    /// use circlet::CircularPalindromeFinder;
    ///
    /// // "aab" rotates to "aba"
    /// assert_eq!(CircularPalindromeFinder::default().find("aab"), "aba");
    /// ```
    pub fn find(&self, s: &str) -> String {
        let chars = s.chars().collect_vec();
        self.find_span(&chars).extract(&chars).into_iter().collect()
    }

    /// Length, in [`char`]s, of the palindrome [`Self::find`] would return.
    pub fn find_len(&self, s: &str) -> usize {
        self.find_span(&s.chars().collect_vec()).len()
    }
}

/// Shrink the palindrome `(start, len)` about its centre until it fits in one period, keeping its parity.
fn fit_to_period(start: usize, len: usize, period: usize) -> (usize, usize) {
    if len <= period {
        return (start, len);
    }

    let trim = (len - period).div_ceil(2);
    trace!("palindrome at {start} of length {len} overruns a period of {period}, trimming {trim} from each end");
    (start + trim, len - 2 * trim)
}
