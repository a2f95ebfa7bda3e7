use thiserror::Error;

/// Failure of a settings request.
///
/// Display yields only the description so it can be appended to a
/// user-facing prefix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Encode(String),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
}

impl From<serde_json::Error> for SubmitError {
    fn from(e: serde_json::Error) -> Self {
        SubmitError::Decode(e.to_string())
    }
}
