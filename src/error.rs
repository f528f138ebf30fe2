/** errors that can be raised while reading instances, validating parameters or exporting results.

Search outcomes (feasible, step limit reached, ...) are not errors: they are reported
by the search procedures themselves.
*/
#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    /// the input (graph or coloring) does not respect its format
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// a search parameter is out of its valid range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// reading or writing a file failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// statistics could not be serialized
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// result type used throughout the crate
pub type Result<T> = std::result::Result<T, ColorError>;
