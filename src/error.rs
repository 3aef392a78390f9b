// Error types shared by the API client and the transport layer.

use thiserror::Error;

/// Failure to exchange a request with the backend at all: DNS, connect,
/// TLS, timeout or reading the response body.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The operation needs a session and `login` has not succeeded yet.
    /// Raised before anything is sent.
    #[error("Not authenticated, please log in first")]
    NotAuthenticated,
    /// Login answered 200 but without an access token or token type.
    #[error("Login response did not contain a token")]
    EmptyToken,
    #[error("Request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("Unexpected response status code {code}")]
    UnexpectedStatus { code: u16 },
    #[error("Could not decode response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Invalid backend \"{0}\"")]
    InvalidBackend(String),
}

impl ApiError {
    /// Status code of an `UnexpectedStatus` error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { code } => Some(*code),
            _ => None,
        }
    }
}
