//! Claim validation options and checks.

use crate::claims::Claims;
use crate::error::{JwtError, JwtResult};
use chrono::{Duration, Utc};

/// Validation policy applied to verified claims.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Leeway for time-based claims.
    pub leeway: Duration,
    /// Validate expiry (`exp`) when present.
    pub validate_exp: bool,
    /// Validate not-before (`nbf`) when present.
    pub validate_nbf: bool,
    /// Expected issuer; `iss` must match exactly when set.
    pub expected_issuer: Option<String>,
    /// Expected audience; `aud` must contain at least one entry when set.
    pub expected_audience: Option<Vec<String>>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            leeway: Duration::seconds(60),
            validate_exp: true,
            validate_nbf: true,
            expected_issuer: None,
            expected_audience: None,
        }
    }
}

impl ValidationOptions {
    /// Create validation options with no leeway on time-based claims.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            leeway: Duration::zero(),
            ..Self::default()
        }
    }

    /// Set the time leeway for validation.
    #[must_use]
    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }

    /// Set whether to validate expiration.
    #[must_use]
    pub fn validate_expiration(mut self, validate: bool) -> Self {
        self.validate_exp = validate;
        self
    }

    /// Set whether to validate not-before.
    #[must_use]
    pub fn validate_not_before(mut self, validate: bool) -> Self {
        self.validate_nbf = validate;
        self
    }

    /// Set the expected issuer.
    #[must_use]
    pub fn expect_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.expected_issuer = Some(issuer.into());
        self
    }

    /// Set the expected audience.
    #[must_use]
    pub fn expect_audience(mut self, audience: Vec<String>) -> Self {
        self.expected_audience = Some(audience);
        self
    }
}

/// Check registered claims against the policy.
///
/// Time-based claims are only enforced when present; issuer and audience
/// are only enforced when an expectation is configured.
pub(crate) fn check_registered_claims(
    claims: &Claims,
    options: &ValidationOptions,
) -> JwtResult<()> {
    let now = Utc::now().timestamp();
    let leeway = options.leeway.num_seconds();

    if options.validate_exp {
        if let Some(value) = claims.get("exp") {
            let exp = value
                .as_i64()
                .ok_or_else(|| JwtError::InvalidToken("exp claim is not an integer".to_string()))?;
            if now - leeway > exp {
                return Err(JwtError::TokenExpired);
            }
        }
    }

    if options.validate_nbf {
        if let Some(value) = claims.get("nbf") {
            let nbf = value
                .as_i64()
                .ok_or_else(|| JwtError::InvalidToken("nbf claim is not an integer".to_string()))?;
            if now + leeway < nbf {
                return Err(JwtError::TokenNotYetValid);
            }
        }
    }

    if let Some(expected) = &options.expected_issuer {
        if claims.issuer() != Some(expected.as_str()) {
            return Err(JwtError::InvalidIssuer);
        }
    }

    if let Some(expected) = &options.expected_audience {
        let audience = claims.audience().ok_or(JwtError::InvalidAudience)?;
        let matched = expected.iter().any(|e| audience.contains(&e.as_str()));
        if !matched {
            return Err(JwtError::InvalidAudience);
        }
    }

    Ok(())
}
