pub mod cs;
pub mod error;

pub use cs::{combinatorial, subarray};
pub use error::{Error, Result};
