#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    use crate::builder::{FinderBuilder, TieBreak, Topology};
    use crate::reference::{longest_circular_palindrome_naive, rotate};
    use crate::{longest_circular_palindrome, longest_circular_palindrome_length, CircularPalindromeFinder};

    /// Up to 12 characters over a small alphabet, so palindromes are common and the cubic oracle stays fast.
    #[derive(Clone, Debug)]
    struct ShortText(String);

    impl Arbitrary for ShortText {
        fn arbitrary(g: &mut Gen) -> Self {
            let len = usize::arbitrary(g) % 13;
            let alphabet = ['a', 'b', 'c', '牛'];
            Self((0..len).map(|_| *g.choose(&alphabet).unwrap()).collect())
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            Box::new(self.0.shrink().map(Self))
        }
    }

    fn reads_same_reversed(s: &str) -> bool {
        s.chars().eq(s.chars().rev())
    }

    #[test]
    fn scenarios() {
        for (input, expected) in [("", ""), ("a", "a"), ("aab", "aba"), ("abcba", "abcba"), ("aabbaa", "aabbaa")] {
            assert_eq!(longest_circular_palindrome(input), expected, "input {input:?}");
            assert_eq!(longest_circular_palindrome_length(input), expected.chars().count(), "input {input:?}");
        }
    }

    #[test]
    fn absent_input() {
        assert_eq!(longest_circular_palindrome(None::<&str>), "");
        assert_eq!(longest_circular_palindrome_length(None::<&str>), 0);
    }

    #[test]
    fn edge_lengths() {
        assert_eq!(longest_circular_palindrome_length("ab"), 1);
        assert_eq!(longest_circular_palindrome_length("abba"), 4);
        assert_eq!(longest_circular_palindrome_length("aaa"), 3);
        assert_eq!(longest_circular_palindrome_length("abcdef"), 1);
        // "racecar" hides in a rotation of "carrace"
        assert_eq!(longest_circular_palindrome("carrace"), "racecar");
    }

    #[test]
    fn punctuation_is_literal() {
        assert_eq!(longest_circular_palindrome("a,b"), "a");
        assert_eq!(longest_circular_palindrome_length("A a"), 1);
        assert_eq!(longest_circular_palindrome(" x "), " x ");
    }

    #[quickcheck]
    fn length_matches_result(ShortText(s): ShortText) -> bool {
        longest_circular_palindrome_length(s.as_str()) == longest_circular_palindrome(s.as_str()).chars().count()
    }

    #[quickcheck]
    fn result_is_palindrome(ShortText(s): ShortText) -> bool {
        reads_same_reversed(&longest_circular_palindrome(s.as_str()))
    }

    #[quickcheck]
    fn result_is_window_of_a_rotation(ShortText(s): ShortText) -> bool {
        let n = s.chars().count();
        let found = longest_circular_palindrome(s.as_str());
        (0..n.max(1)).any(|k| rotate(&s, k).starts_with(&found))
    }

    #[quickcheck]
    fn bounded_by_linear_and_length(ShortText(s): ShortText) -> bool {
        let linear = FinderBuilder::new().topology(Topology::Linear).build();
        let circular = longest_circular_palindrome_length(s.as_str());
        linear.find_len(&s) <= circular && circular <= s.chars().count()
    }

    #[quickcheck]
    fn rotation_invariant(ShortText(s): ShortText, k: usize) -> bool {
        longest_circular_palindrome_length(s.as_str()) == longest_circular_palindrome_length(rotate(&s, k).as_str())
    }

    #[quickcheck]
    fn agrees_with_brute_force(ShortText(s): ShortText) -> bool {
        longest_circular_palindrome_length(s.as_str()) == longest_circular_palindrome_naive(&s).chars().count()
    }

    #[quickcheck]
    fn tie_break_does_not_change_length(ShortText(s): ShortText) -> bool {
        let last = FinderBuilder::new().tie_break(TieBreak::LastCentre).build();
        let found = last.find(&s);
        reads_same_reversed(&found) && found.chars().count() == CircularPalindromeFinder::default().find_len(&s)
    }

    #[test]
    fn exhaustive_small_binary_strings() {
        for len in 0..=8 {
            for letters in (0..len).map(|_| ['a', 'b']).multi_cartesian_product() {
                let s: String = letters.into_iter().collect();
                assert_eq!(
                    longest_circular_palindrome_length(s.as_str()),
                    longest_circular_palindrome_naive(&s).chars().count(),
                    "input {s:?}"
                );
            }
        }
    }
}
