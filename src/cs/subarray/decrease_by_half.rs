use log::{debug, trace};

use super::summed_span::{range_sum, SummedSpan};
use crate::error::{check_non_empty, Result};

/// Finds the maximum subarray of `input` by splitting it in half.
///
/// Each half is solved recursively, the best range crossing the midpoint is
/// found with two linear scans, and the best of the three candidates is kept.
/// Recursion depth is O(log n) and the total time O(n log n).
///
/// When candidates tie on sum, the range entirely in the left half is
/// preferred, then the one entirely in the right half, then the crossing one.
///
/// # Panics
///
/// Panics if `input` is empty.
///
/// # Examples
///
/// ```
/// use polyexp::cs::subarray::max_subarray_dbh;
///
/// let input = [13, -3, -25, 20, -3, -16, -23, 18, 20, -7, 12, -5, -22, 15, -4, 7];
/// let span = max_subarray_dbh(&input);
/// assert_eq!(span.range(), 7..11);
/// assert_eq!(span.sum(), 43);
/// ```
pub fn max_subarray_dbh(input: &[i32]) -> SummedSpan {
    match try_max_subarray_dbh(input) {
        Ok(span) => span,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`max_subarray_dbh`], reporting empty input as an error.
pub fn try_max_subarray_dbh(input: &[i32]) -> Result<SummedSpan> {
    check_non_empty(input)?;

    if input.len() == 1 {
        return Ok(SummedSpan::from_slice(input, 0, 1));
    }

    let (begin, end) = max_subarray_recursive(input, 0, input.len() - 1);
    let span = SummedSpan::from_slice(input, begin, end);
    debug!(
        "decrease-by-half max subarray over {} elements: [{}, {}) sum {}",
        input.len(),
        begin,
        end,
        span.sum()
    );
    Ok(span)
}

/// Best range within the inclusive bounds `[low, high]`, returned as a
/// half-open `(begin, end)` pair.
fn max_subarray_recursive(input: &[i32], low: usize, high: usize) -> (usize, usize) {
    if low == high {
        return (low, low + 1);
    }

    let middle = (low + high) / 2;
    let left = max_subarray_recursive(input, low, middle);
    let right = max_subarray_recursive(input, middle + 1, high);
    let crossing = max_crossing_subarray(input, low, middle, high);

    let left_sum = range_sum(input, left.0, left.1);
    let right_sum = range_sum(input, right.0, right.1);
    let crossing_sum = range_sum(input, crossing.0, crossing.1);

    let best = if left_sum >= right_sum && left_sum >= crossing_sum {
        left
    } else if right_sum >= crossing_sum {
        right
    } else {
        crossing
    };
    trace!(
        "[{}, {}]: left {:?}={} right {:?}={} crossing {:?}={} -> {:?}",
        low,
        high,
        left,
        left_sum,
        right,
        right_sum,
        crossing,
        crossing_sum,
        best
    );
    best
}

/// Best range containing both `input[middle]` and `input[middle + 1]`.
fn max_crossing_subarray(
    input: &[i32],
    low: usize,
    middle: usize,
    high: usize,
) -> (usize, usize) {
    let mut best_left = i64::MIN;
    let mut sum = 0;
    let mut begin = middle;
    for i in (low..=middle).rev() {
        sum += i64::from(input[i]);
        if sum > best_left {
            best_left = sum;
            begin = i;
        }
    }

    let mut best_right = i64::MIN;
    sum = 0;
    let mut last = middle + 1;
    for (i, &x) in input.iter().enumerate().take(high + 1).skip(middle + 1) {
        sum += i64::from(x);
        if sum > best_right {
            best_right = sum;
            last = i;
        }
    }

    (begin, last + 1)
}
