use thiserror::Error;

/// Errors returned by minFraud operations.
#[derive(Debug, Error)]
pub enum MinFraudError {
    #[error("http error: {0}")]
    Http(String),

    /// The service answered with a non-2xx status. The body is kept verbatim.
    #[error("minFraud returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl MinFraudError {
    /// HTTP status code of a non-success response, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            MinFraudError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
