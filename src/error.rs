use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SortError {
    /// The requested length does not fit in the buffer.
    InvalidInput { len: usize, capacity: usize },
    UnknownAlgorithm(String),
    ThreadPool(String),
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidInput { len, capacity } => {
                write!(f, "invalid input: length {len} exceeds buffer of {capacity} elements")
            }
            SortError::UnknownAlgorithm(name) => write!(f, "unknown sort algorithm '{name}'"),
            SortError::ThreadPool(reason) => write!(f, "failed to build worker pool: {reason}"),
        }
    }
}

impl Error for SortError {}
