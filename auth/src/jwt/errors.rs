use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Invalid claims: {0}")]
    InvalidClaims(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}

/// Error for token lifetime parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TtlError {
    #[error("Token lifetime is empty")]
    Empty,

    #[error("Invalid token lifetime: {0}")]
    InvalidFormat(String),

    #[error("Unknown token lifetime unit: {0}")]
    UnknownUnit(String),

    #[error("Token lifetime must be positive: {0}")]
    NotPositive(String),
}
