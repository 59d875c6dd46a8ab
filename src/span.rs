use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Reasons a [`CircularSpan`] may be rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum SpanError {
    /// The rotation does not index into the period, i.e. it is not a valid starting point of any rotation.
    #[error("rotation {rotation} is outside a period of {period}")]
    RotationOutOfRange {
        /// The rejected rotation.
        rotation: usize,
        /// Length of the cyclic sequence.
        period: usize,
    },
    /// The window is longer than the sequence and would reuse elements beyond one full turn.
    #[error("length {len} exceeds the period {period}")]
    LengthExceedsPeriod {
        /// The rejected length.
        len: usize,
        /// Length of the cyclic sequence.
        period: usize,
    },
}

/// A contiguous window of some rotation of a cyclic sequence of length `period`.
///
/// The window starts at element `rotation` of the original sequence and runs for `len` elements, wrapping around the
/// end if needed. Equivalently, it is the first `len` elements of the sequence rotated left by `rotation`.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct CircularSpan {
    period: usize,
    rotation: usize,
    len: usize,
}

impl CircularSpan {
    /// Construct a window of a sequence of length `period`.
    ///
    /// `rotation` must be below `period` (or 0 for an empty sequence) and `len` must not exceed `period`.
    pub fn new(period: usize, rotation: usize, len: usize) -> Result<Self, SpanError> {
        if rotation >= period && !(rotation == 0 && period == 0) {
            return Err(SpanError::RotationOutOfRange { rotation, period });
        }
        if len > period {
            return Err(SpanError::LengthExceedsPeriod { len, period });
        }

        Ok(Self { period, rotation, len })
    }

    /// The empty window of the empty sequence.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Length of the cyclic sequence this window belongs to.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Index in the original sequence at which the window starts.
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Number of elements in the window.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the window holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the window runs past the end of the original sequence and continues from its start.
    pub fn wraps(&self) -> bool {
        self.rotation + self.len > self.period
    }

    /// Indices into the original sequence, in window order.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let Self { period, rotation, len } = *self;
        (rotation..rotation + len).map(move |i| i % period)
    }

    /// Copy the window out of `seq`, which must have length [`Self::period`].
    pub fn extract<T: Clone>(&self, seq: &[T]) -> Vec<T> {
        debug_assert_eq!(seq.len(), self.period);
        self.indices().map(|i| seq[i].clone()).collect()
    }
}

impl Display for CircularSpan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{} (mod {})", self.rotation, self.len, self.period)
    }
}
