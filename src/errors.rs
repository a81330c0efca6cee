use thiserror::Error;

pub type BobResult<T> = Result<T, BobError>;

/// Errors raised by the builder itself.
///
/// Failures coming from factories or overrides are never wrapped in this type;
/// panics unwind through untouched and `try_*` errors are returned as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BobError {
    #[error("InvalidArgument: count {requested} exceeds limit {limit}")]
    InvalidArgument { requested: usize, limit: usize },
}
