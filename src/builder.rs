//! Configuration of a [`CircularPalindromeFinder`].

use strum::VariantArray;

use crate::finder::CircularPalindromeFinder;

/// Which windows of the input a [`CircularPalindromeFinder`] considers.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, VariantArray, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Topology {
    /// Windows of every cyclic rotation of the input.
    #[default]
    Circular,
    /// Plain substrings of the input, with no wrap-around.
    Linear,
}

/// Which palindrome a [`CircularPalindromeFinder`] reports when several share the maximal length.
///
/// Candidates are ordered by their centre in the searched sequence, which for [`Topology::Circular`] is the input
/// doubled. The reported window is always rebased into the first copy.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, VariantArray, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum TieBreak {
    /// Keep the first maximal palindrome found.
    #[default]
    FirstCentre,
    /// Keep the last maximal palindrome found.
    LastCentre,
}

/// Chained configuration of a [`CircularPalindromeFinder`].
///
/// Builders mutate themselves while building but are [`Copy`], so a partly configured builder can be saved and reused.
///
/// ```
/// use circlet::builder::{FinderBuilder, Topology};
///
/// let linear = FinderBuilder::new().topology(Topology::Linear).build();
/// assert_eq!(linear.find("aab"), "aa");
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FinderBuilder {
    topology: Topology,
    tie_break: TieBreak,
}

impl FinderBuilder {
    /// A builder with [`Topology::Circular`] and [`TieBreak::FirstCentre`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the windows to search.
    pub fn topology(&mut self, topology: Topology) -> &mut Self {
        self.topology = topology;
        self
    }

    /// Set how ties between maximal palindromes are broken.
    pub fn tie_break(&mut self, tie_break: TieBreak) -> &mut Self {
        self.tie_break = tie_break;
        self
    }

    /// Convert the state of this builder into a finder.
    pub fn build(&self) -> CircularPalindromeFinder {
        CircularPalindromeFinder::new(self.topology, self.tie_break)
    }
}
