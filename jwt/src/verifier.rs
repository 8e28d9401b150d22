//! Token verification against a shared secret.

use crate::claims::Claims;
use crate::crypto;
use crate::error::{JwtError, JwtResult};
use crate::types::{JwtHeader, SecretKey};
use crate::validation::{self, ValidationOptions};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

/// The only algorithm this verifier accepts.
const HS256_ALG: &str = "HS256";

/// Verifies tokens signed with a shared secret and returns their claims.
///
/// The secret is injected at construction and held for the lifetime of the
/// verifier; nothing is read from ambient process state at verification
/// time. Calls are independent and touch no shared mutable state, so a
/// single `Verifier` can be used concurrently.
#[derive(Debug, Clone)]
pub struct Verifier {
    secret: SecretKey,
    options: ValidationOptions,
}

impl Verifier {
    /// Create a verifier with the default [`ValidationOptions`].
    #[must_use]
    pub fn new(secret: SecretKey) -> Self {
        Self {
            secret,
            options: ValidationOptions::default(),
        }
    }

    /// Create a verifier whose secret is read from the named environment
    /// variable.
    pub fn from_env(var: &str) -> JwtResult<Self> {
        Ok(Self::new(SecretKey::from_env(var)?))
    }

    /// Replace the validation options.
    #[must_use]
    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    /// Validation options in effect.
    #[must_use]
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Verify a token, returning its claims only if the signature is valid
    /// under the configured secret and the claims pass validation.
    ///
    /// This entry point never raises: an absent token yields `None`
    /// immediately, and every verification failure is logged and collapsed
    /// into `None`. Callers that need to distinguish failure causes should
    /// use [`Verifier::verify_checked`].
    pub async fn verify(&self, token: Option<&str>) -> Option<Claims> {
        let token = token?;
        match self.verify_checked(token).await {
            Ok(claims) => Some(claims),
            Err(err) => {
                tracing::warn!(error = %err, "Token verification failed");
                None
            }
        }
    }

    /// Verify a token, reporting the failure cause on rejection.
    ///
    /// Checks, in order: token shape (exactly three segments), header
    /// algorithm (`HS256` only), HMAC-SHA256 signature, payload decoding,
    /// then registered-claim validation per the configured
    /// [`ValidationOptions`].
    pub async fn verify_checked(&self, token: &str) -> JwtResult<Claims> {
        let mut segments = token.split('.');
        let (header_b64, payload_b64, signature_b64) = match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some(header), Some(payload), Some(signature), None) => (header, payload, signature),
            _ => {
                return Err(JwtError::InvalidToken(
                    "expected three dot-separated segments".to_string(),
                ))
            }
        };

        let header_bytes = URL_SAFE_NO_PAD.decode(header_b64)?;
        let header: JwtHeader = serde_json::from_slice(&header_bytes)?;
        if header.alg != HS256_ALG {
            return Err(JwtError::UnsupportedAlgorithm(header.alg));
        }

        let signing_input = format!("{header_b64}.{payload_b64}");
        crypto::hs256_verify(
            self.secret.as_bytes(),
            signing_input.as_bytes(),
            signature_b64,
        )?;

        let payload = URL_SAFE_NO_PAD.decode(payload_b64)?;
        let claims: Claims = serde_json::from_slice(&payload)?;
        validation::check_registered_claims(&claims, &self.options)?;

        Ok(claims)
    }
}
