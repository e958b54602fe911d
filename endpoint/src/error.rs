use thiserror::Error;

/// Result type for the `endpoint_builder` runtime
pub type Result<T> = std::result::Result<T, error_stack::Report<Error>>;

/// Errors of the runtime path template interpreter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The template was rejected; holds the template as written
    #[error("Invalid path template `{0}`")]
    InvalidTemplate(String),

    /// `render` got a different number of values than the template has parameters
    #[error("Path template expects {expected} parameter values, got {actual}")]
    ParameterCountMismatch {
        /// Parameters in the template
        expected: usize,
        /// Values supplied
        actual:   usize,
    },
}
