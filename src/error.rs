use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the boundaries of the record types.
///
/// The records themselves never validate their contents; only indexed
/// accumulation and foreign-language conversions can fail.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Array slot outside the fixed length of the record.
    #[error("{what} index {index} out of bounds (length {len})")]
    OutOfBounds {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// Malformed input handed in across an API boundary.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
