pub mod subset_sum;

pub use subset_sum::{
    subset_sum_exh, subset_sum_exh_indices, try_subset_sum_exh, try_subset_sum_exh_indices,
    MAX_SUBSET_SUM_LEN,
};
