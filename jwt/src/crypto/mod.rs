//! Cryptographic operations for token verification.

mod hmac_sha256;

pub(crate) use hmac_sha256::hs256_verify;
