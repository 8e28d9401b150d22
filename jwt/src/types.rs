//! JWT header and key material types.

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// JWT header structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtHeader {
    /// Signing algorithm name, e.g. `HS256`.
    pub alg: String,
    /// Token type. Optional on the wire; emitted as `JWT` when produced here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    /// Key identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

impl JwtHeader {
    /// Create a header for the given algorithm.
    #[must_use]
    pub fn new(alg: &str) -> Self {
        Self {
            alg: alg.to_string(),
            typ: Some("JWT".to_string()),
            kid: None,
        }
    }

    /// Attach a key identifier.
    #[must_use]
    pub fn with_key_id(mut self, kid: String) -> Self {
        self.kid = Some(kid);
        self
    }
}

/// Shared secret used as verification input.
///
/// The key bytes are owned by this type and wiped from memory on drop.
/// `Debug` output never reveals the key material.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Create a secret key from raw bytes or a UTF-8 string.
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self(bytes.as_ref().to_vec())
    }

    /// Read a secret key from the named environment variable.
    ///
    /// An unset or empty variable is reported as [`JwtError::MissingSecret`];
    /// the value is captured once, never re-read.
    pub fn from_env(var: &str) -> JwtResult<Self> {
        match std::env::var(var) {
            Ok(value) if !value.is_empty() => Ok(Self(value.into_bytes())),
            _ => Err(JwtError::MissingSecret(var.to_string())),
        }
    }

    /// Key bytes, for handing to the MAC.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretKey").field(&"<redacted>").finish()
    }
}

impl From<&str> for SecretKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Vec<u8>> for SecretKey {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}
