//! HMAC-SHA256 signature verification.

use crate::error::{JwtError, JwtResult};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Verify an HS256 signature over `signing_input` (`header.payload`).
///
/// The provided signature segment is base64url-decoded and compared against
/// the expected MAC in constant time.
pub(crate) fn hs256_verify(
    secret: &[u8],
    signing_input: &[u8],
    signature_b64: &str,
) -> JwtResult<()> {
    let provided = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| JwtError::InvalidSignature)?;

    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| JwtError::InvalidKey("Invalid HMAC key".to_string()))?;
    mac.update(signing_input);
    let expected = mac.finalize().into_bytes();

    if bool::from(expected.as_slice().ct_eq(provided.as_slice())) {
        Ok(())
    } else {
        Err(JwtError::InvalidSignature)
    }
}
