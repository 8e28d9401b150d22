//! Error types for token inspection and verification.

use thiserror::Error;

/// Result type for JWT operations.
pub type JwtResult<T> = std::result::Result<T, JwtError>;

/// JWT operation errors.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    /// Token structure is not a valid JWT
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Signature does not match the configured secret
    #[error("Invalid signature")]
    InvalidSignature,

    /// Token expiry (exp) is in the past
    #[error("Token has expired")]
    TokenExpired,

    /// Token not-before (nbf) is in the future
    #[error("Token not yet valid")]
    TokenNotYetValid,

    /// Header algorithm is not accepted by the verifier
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Issuer (iss) does not match the expected value
    #[error("Invalid issuer")]
    InvalidIssuer,

    /// Audience (aud) does not contain an expected value
    #[error("Invalid audience")]
    InvalidAudience,

    /// Key material is unusable for verification
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Configured secret is absent or empty
    #[error("Missing secret: {0} is not set")]
    MissingSecret(String),

    /// Base64 decoding of a token segment failed
    #[error("Base64 decode error: {0}")]
    Decode(String),

    /// JSON (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<base64::DecodeError> for JwtError {
    fn from(err: base64::DecodeError) -> Self {
        JwtError::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for JwtError {
    fn from(err: serde_json::Error) -> Self {
        JwtError::Serialization(err.to_string())
    }
}
