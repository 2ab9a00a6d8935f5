use log::debug;

use crate::error::{check_non_empty, Error, Result};

/// Longest input accepted by the exhaustive subset sum search, so that every
/// bit pattern over the indices fits in a `u64` counter.
pub const MAX_SUBSET_SUM_LEN: usize = 63;

/// Solves the subset sum problem by exhaustive search, returning the values of
/// a non-empty subset of `input` that adds up to exactly `target`.
///
/// Values are returned in index order. `None` means no non-empty subset
/// matches; the empty subset is never returned, even for a `target` of zero.
/// See [`subset_sum_exh_indices`] for the enumeration order. O(n * 2^n) time.
///
/// # Panics
///
/// Panics if `input` is empty or longer than [`MAX_SUBSET_SUM_LEN`].
///
/// # Examples
///
/// ```
/// use polyexp::cs::combinatorial::subset_sum_exh;
///
/// assert_eq!(subset_sum_exh(&[3, 34, 4, 12, 5, 2], 9), Some(vec![4, 5]));
/// assert_eq!(subset_sum_exh(&[1, 2, 3], 100), None);
/// ```
pub fn subset_sum_exh(input: &[i32], target: i32) -> Option<Vec<i32>> {
    match try_subset_sum_exh(input, target) {
        Ok(subset) => subset,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`subset_sum_exh`], reporting precondition failures as errors.
pub fn try_subset_sum_exh(input: &[i32], target: i32) -> Result<Option<Vec<i32>>> {
    let indices = try_subset_sum_exh_indices(input, target)?;
    Ok(indices.map(|indices| indices.into_iter().map(|i| input[i]).collect()))
}

/// Exhaustive subset sum returning the ascending indices of the matching
/// subset instead of its values.
///
/// Bit patterns are tried from `0` up to `2^n - 1`, bit `j` selecting index
/// `j`. Each pattern's subset is built by scanning its bits from low to high,
/// and the search stops as soon as the subset built so far is non-empty and
/// sums to `target`.
///
/// # Panics
///
/// Panics if `input` is empty or longer than [`MAX_SUBSET_SUM_LEN`].
///
/// # Examples
///
/// ```
/// use polyexp::cs::combinatorial::subset_sum_exh_indices;
///
/// // Values may repeat, indices tell the copies apart.
/// assert_eq!(subset_sum_exh_indices(&[2, 2, 2], 4), Some(vec![0, 1]));
/// ```
pub fn subset_sum_exh_indices(input: &[i32], target: i32) -> Option<Vec<usize>> {
    match try_subset_sum_exh_indices(input, target) {
        Ok(subset) => subset,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`subset_sum_exh_indices`], reporting precondition failures as errors.
pub fn try_subset_sum_exh_indices(input: &[i32], target: i32) -> Result<Option<Vec<usize>>> {
    check_non_empty(input)?;
    if input.len() > MAX_SUBSET_SUM_LEN {
        return Err(Error::InputTooLarge {
            len: input.len(),
            max: MAX_SUBSET_SUM_LEN,
        });
    }

    let n = input.len();
    let target = i64::from(target);
    let patterns = 1u64 << n;
    let mut candidate = Vec::with_capacity(n);

    for pattern in 0..patterns {
        candidate.clear();
        let mut sum = 0i64;
        for (j, &x) in input.iter().enumerate() {
            if (pattern >> j) & 1 == 1 {
                candidate.push(j);
                sum += i64::from(x);
            }
            if !candidate.is_empty() && sum == target {
                debug!(
                    "subset sum {} found at pattern {:#b} over {} elements",
                    target, pattern, n
                );
                return Ok(Some(candidate));
            }
        }
    }

    debug!(
        "subset sum {} not found after {} patterns over {} elements",
        target, patterns, n
    );
    Ok(None)
}
