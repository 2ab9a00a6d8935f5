use log::debug;

use super::summed_span::SummedSpan;
use crate::error::{check_non_empty, Result};

/// Kadane's algorithm for the maximum subarray in one pass over `input`.
///
/// The running range restarts at the current element whenever its sum has
/// dropped to zero or below. The best range is replaced only by a strictly
/// greater sum, so the maximal range that ends first is returned. O(n) time.
///
/// # Panics
///
/// Panics if `input` is empty.
///
/// # Examples
///
/// ```
/// use polyexp::cs::subarray::max_subarray_kadane;
///
/// let arr = [1, -2, 3, 5, -1];
/// let span = max_subarray_kadane(&arr);
/// assert_eq!(span.sum(), 8); // The subarray [3, 5] has sum 8
/// assert_eq!(span.range(), 2..4);
/// ```
pub fn max_subarray_kadane(input: &[i32]) -> SummedSpan {
    match try_max_subarray_kadane(input) {
        Ok(span) => span,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`max_subarray_kadane`], reporting empty input as an error.
pub fn try_max_subarray_kadane(input: &[i32]) -> Result<SummedSpan> {
    check_non_empty(input)?;

    let mut current_begin = 0;
    let mut current_sum = i64::from(input[0]);
    let (mut begin, mut end, mut max_sum) = (0, 1, current_sum);

    for (i, &val) in input.iter().enumerate().skip(1) {
        // Either extend the current subarray or start a new one at `val`
        if current_sum <= 0 {
            current_begin = i;
            current_sum = i64::from(val);
        } else {
            current_sum += i64::from(val);
        }
        if current_sum > max_sum {
            max_sum = current_sum;
            begin = current_begin;
            end = i + 1;
        }
    }

    debug!(
        "kadane max subarray over {} elements: [{}, {}) sum {}",
        input.len(),
        begin,
        end,
        max_sum
    );
    Ok(SummedSpan::new(begin, end, max_sum))
}
