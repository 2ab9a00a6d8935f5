use log::debug;

use super::summed_span::{range_sum, SummedSpan};
use crate::error::{check_non_empty, Result};

/// Finds the maximum subarray of `input` by trying every contiguous range.
///
/// Every pair `i < j <= n` is visited once, `i` ascending then `j` ascending,
/// and each range is summed from scratch, giving O(n^3) time and O(1) extra
/// space. A range replaces the current best only when its sum is strictly
/// greater, so the first maximal range in that order is returned.
///
/// # Panics
///
/// Panics if `input` is empty.
///
/// # Examples
///
/// ```
/// use polyexp::cs::subarray::max_subarray_exh;
///
/// let input = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
/// let span = max_subarray_exh(&input);
/// assert_eq!(span.sum(), 6);
/// assert_eq!(span.as_slice(&input), &[4, -1, 2, 1]);
/// ```
pub fn max_subarray_exh(input: &[i32]) -> SummedSpan {
    match try_max_subarray_exh(input) {
        Ok(span) => span,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`max_subarray_exh`], reporting empty input as an error.
pub fn try_max_subarray_exh(input: &[i32]) -> Result<SummedSpan> {
    check_non_empty(input)?;

    if input.len() == 1 {
        return Ok(SummedSpan::from_slice(input, 0, 1));
    }

    let n = input.len();
    let (mut begin, mut end) = (0, 1);
    let mut best = i64::from(input[0]);
    for i in 0..n {
        for j in (i + 1)..=n {
            let sum = range_sum(input, i, j);
            if sum > best {
                best = sum;
                begin = i;
                end = j;
            }
        }
    }

    let span = SummedSpan::new(begin, end, best);
    debug!(
        "exhaustive max subarray over {} elements: [{}, {}) sum {}",
        n, begin, end, best
    );
    Ok(span)
}
