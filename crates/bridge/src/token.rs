//! Attestation token model.

use serde::{Deserialize, Serialize};

/// Opaque token minted by an attestation provider.
///
/// The token material is never inspected by the bridge; backends receiving
/// it perform the actual verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttestationToken {
    /// Token material, opaque to the bridge (JWT-shaped in production)
    pub token: String,
    /// Local timestamp after which the token expires (Unix epoch milliseconds)
    pub expire_time_millis: u64,
}

impl AttestationToken {
    /// Create a token from its material and absolute expiry timestamp.
    pub fn new(token: impl Into<String>, expire_time_millis: u64) -> Self {
        Self {
            token: token.into(),
            expire_time_millis,
        }
    }

    /// Whether the token has expired at the given local timestamp.
    pub fn is_expired(&self, now_millis: u64) -> bool {
        now_millis >= self.expire_time_millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_inclusive_at_the_boundary() {
        let token = AttestationToken::new("tok", 1_000);
        assert!(!token.is_expired(999));
        assert!(token.is_expired(1_000));
        assert!(token.is_expired(1_001));
    }

    #[test]
    fn serialization_has_stable_fields() {
        let token = AttestationToken::new("abc123", 42);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"token":"abc123","expire_time_millis":42}"#);
    }
}
