use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The allocator could not provide a buffer of `requested` slots.
    AllocFailed { requested: usize },

    /// An index did not name a live element.
    IndexOutOfRange { index: usize, len: usize },

    /// Positional insert at `pos > len`. Only `0..=len` is valid.
    InvalidPosition { pos: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AllocFailed { requested } => {
                write!(f, "allocation failed: requested capacity of {} slots", requested)
            }
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of range for length {}", index, len)
            }
            Error::InvalidPosition { pos, len } => {
                write!(f, "cannot insert at position {} in array of length {}", pos, len)
            }
        }
    }
}

impl std::error::Error for Error {}
