use thiserror::Error;

/// The result type of fallible path operations.
pub type PathResult<T> = Result<T, PathError>;

/// Errors reported by [`Path`](crate::Path) operations.
///
/// Operations check their arguments before touching the path, so an error
/// always leaves the path exactly as it was before the call.
#[non_exhaustive]
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathError {
    #[error("Invalid argument.")]
    InvalidArgument,
    #[error("Out of memory.")]
    OutOfMemory,
    #[error("Insufficient buffer: {required} entries required, {provided} provided.")]
    InsufficientBuffer { required: usize, provided: usize },
}
