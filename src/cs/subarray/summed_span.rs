use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use crate::error::{Error, Result};

/// A non-empty range `[begin, end)` of indices into a sequence of `i32`,
/// together with the sum of the elements in that range.
///
/// The span does not borrow the sequence; use [`SummedSpan::as_slice`] to view
/// the elements again. Two spans are equal when their bounds are equal.
///
/// # Examples
///
/// ```
/// use polyexp::cs::subarray::SummedSpan;
///
/// let input = [3, -1, 4, -1, 5];
/// let span = SummedSpan::from_slice(&input, 1, 4);
/// assert_eq!(span.size(), 3);
/// assert_eq!(span.sum(), 2);
/// assert_eq!(span.as_slice(&input), &[-1, 4, -1]);
/// assert_eq!(span.to_string(), "summed_span, size=3, sum=2");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SummedSpan {
    begin: usize,
    end: usize,
    sum: i64,
}

impl SummedSpan {
    /// Builds a span from its bounds and an already known sum. O(1).
    ///
    /// # Panics
    ///
    /// Panics if `begin >= end`.
    pub fn new(begin: usize, end: usize, sum: i64) -> Self {
        match Self::try_new(begin, end, sum) {
            Ok(span) => span,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`SummedSpan::new`], reporting an empty range as an error.
    pub fn try_new(begin: usize, end: usize, sum: i64) -> Result<Self> {
        if begin >= end {
            return Err(Error::InvalidSpan { begin, end });
        }
        Ok(Self { begin, end, sum })
    }

    /// Builds a span over `input[begin..end]`, summing it in one pass.
    ///
    /// # Panics
    ///
    /// Panics if `begin >= end` or `end > input.len()`.
    pub fn from_slice(input: &[i32], begin: usize, end: usize) -> Self {
        match Self::try_from_slice(input, begin, end) {
            Ok(span) => span,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`SummedSpan::from_slice`], reporting bad bounds as an error.
    pub fn try_from_slice(input: &[i32], begin: usize, end: usize) -> Result<Self> {
        if begin >= end {
            return Err(Error::InvalidSpan { begin, end });
        }
        if end > input.len() {
            return Err(Error::SpanOutOfBounds {
                end,
                len: input.len(),
            });
        }
        Ok(Self {
            begin,
            end,
            sum: range_sum(input, begin, end),
        })
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// Number of elements covered, always at least one.
    pub fn size(&self) -> usize {
        self.end - self.begin
    }

    pub fn range(&self) -> Range<usize> {
        self.begin..self.end
    }

    /// The covered elements of the sequence this span was computed over.
    pub fn as_slice<'a>(&self, input: &'a [i32]) -> &'a [i32] {
        &input[self.range()]
    }
}

impl PartialEq for SummedSpan {
    fn eq(&self, other: &Self) -> bool {
        self.begin == other.begin && self.end == other.end
    }
}

impl Eq for SummedSpan {}

impl Hash for SummedSpan {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.begin.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for SummedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "summed_span, size={}, sum={}", self.size(), self.sum)
    }
}

/// Sum of `input[begin..end]`, widened to `i64`.
pub(crate) fn range_sum(input: &[i32], begin: usize, end: usize) -> i64 {
    input[begin..end].iter().map(|&x| i64::from(x)).sum()
}
