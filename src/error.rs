use thiserror::Error;

/// Precondition failures reported by the `try_` entry points.
///
/// The plain entry points panic with the `Display` text of the same variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("input sequence must not be empty")]
    EmptyInput,

    #[error("input has {len} elements, at most {max} are supported")]
    InputTooLarge { len: usize, max: usize },

    #[error("span {begin}..{end} is empty or reversed")]
    InvalidSpan { begin: usize, end: usize },

    #[error("span end {end} is past the end of a sequence of length {len}")]
    SpanOutOfBounds { end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Rejects empty input, shared by every algorithm entry point.
pub(crate) fn check_non_empty<T>(input: &[T]) -> Result<()> {
    if input.is_empty() {
        Err(Error::EmptyInput)
    } else {
        Ok(())
    }
}
