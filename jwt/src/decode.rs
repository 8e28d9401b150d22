//! Unverified payload decoding.

use crate::claims::Claims;
use crate::error::JwtResult;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

/// Decode a token's payload segment **without verifying its signature**.
///
/// Splits the token on `.`, base64url-decodes the second segment and parses
/// it as a JSON object. An absent token, or one with fewer than two
/// segments, yields `Ok(None)` rather than an error; a payload that is not
/// valid base64 or not valid JSON propagates as an error.
///
/// # Security
///
/// This function performs no cryptographic check of any kind. The returned
/// claims are attacker-controlled input and must never be used to
/// authenticate a request. It exists only to inspect a token, e.g. for
/// display or for routing a request before real verification with
/// [`Verifier`](crate::Verifier).
pub fn decode_unsafe(token: Option<&str>) -> JwtResult<Option<Claims>> {
    let Some(token) = token else {
        return Ok(None);
    };

    let mut segments = token.split('.');
    let payload_b64 = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) => payload,
        _ => return Ok(None),
    };

    let payload = URL_SAFE_NO_PAD.decode(payload_b64)?;
    let claims: Claims = serde_json::from_slice(&payload)?;
    Ok(Some(claims))
}
