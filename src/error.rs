use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Method failed: {0}")]
    MethodFailed(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl NameError {
    /// Parser failures reach callers of a name operation as illegal arguments.
    pub fn into_argument_error(self) -> Self {
        match self {
            NameError::MalformedInput(message) => NameError::IllegalArgument(message),
            other => other,
        }
    }
}
