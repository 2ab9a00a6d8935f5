pub mod decrease_by_half;
pub mod exhaustive;
pub mod kadane;
pub mod summed_span;

// Re-export maximum subarray algorithms with descriptive names
pub use decrease_by_half::{max_subarray_dbh, try_max_subarray_dbh};
pub use exhaustive::{max_subarray_exh, try_max_subarray_exh};
pub use kadane::{max_subarray_kadane, try_max_subarray_kadane};
pub use summed_span::SummedSpan;
