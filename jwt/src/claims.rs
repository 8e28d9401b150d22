//! Schema-free JWT claims.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims decoded from a token payload.
///
/// Any JSON object is accepted; no schema is enforced. Accessors are
/// provided for the registered claims of RFC 7519 §4.1, everything else is
/// reachable through [`Claims::get`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Empty claims object.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Look up a claim by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Subject (`sub`) claim.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.0.get("sub").and_then(Value::as_str)
    }

    /// Expiry (`exp`) claim, unix seconds.
    #[must_use]
    pub fn expires_at(&self) -> Option<i64> {
        self.0.get("exp").and_then(Value::as_i64)
    }

    /// Not-before (`nbf`) claim, unix seconds.
    #[must_use]
    pub fn not_before(&self) -> Option<i64> {
        self.0.get("nbf").and_then(Value::as_i64)
    }

    /// Issued-at (`iat`) claim, unix seconds.
    #[must_use]
    pub fn issued_at(&self) -> Option<i64> {
        self.0.get("iat").and_then(Value::as_i64)
    }

    /// Issuer (`iss`) claim.
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.0.get("iss").and_then(Value::as_str)
    }

    /// JWT ID (`jti`) claim.
    #[must_use]
    pub fn jwt_id(&self) -> Option<&str> {
        self.0.get("jti").and_then(Value::as_str)
    }

    /// Audience (`aud`) claim.
    ///
    /// The wire form may be a single string or an array of strings; both are
    /// returned as a list. Non-string entries are skipped.
    #[must_use]
    pub fn audience(&self) -> Option<Vec<&str>> {
        match self.0.get("aud")? {
            Value::String(aud) => Some(vec![aud.as_str()]),
            Value::Array(items) => Some(items.iter().filter_map(Value::as_str).collect()),
            _ => None,
        }
    }

    /// Number of claims present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no claims are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the claims, yielding the underlying map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Claims> for Value {
    fn from(claims: Claims) -> Self {
        Value::Object(claims.0)
    }
}

impl FromIterator<(String, Value)> for Claims {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
