use thiserror::Error;

/// Failure to exchange a request with the remote API.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed with status code {code}")]
    Status { code: u16 },

    #[error("failed to send request: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to marshal body: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type TransportResult<T> = Result<T, TransportError>;
