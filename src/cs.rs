pub mod combinatorial;
pub mod subarray;

// Re-export all modules
pub use combinatorial::*;
pub use subarray::*;
