use thiserror::Error;

/// Errors reported by `ArrayList` and by the sequence helpers.
///
/// Nothing in this crate recovers from or logs these: every failure is handed
/// back to the immediate caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A positional argument fell outside the range valid for the operation.
    #[error("index {index} is out of range for a list of size {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// No element equivalent to the requested value exists.
    #[error("element was not found")]
    ElementNotFound,

    /// The collection argument is not ordered and indexable.
    #[error("collection value is not a sequence")]
    NotASequence,

    /// A required transformer or predicate was not supplied.
    #[error("{0} function is nil")]
    NilFunction(&'static str),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
