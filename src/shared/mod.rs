//! Shared types used across the signing and API modules.

pub mod serde_util;

use serde::{Deserialize, Serialize};

/// Opaque identity string referencing a wallet, sub-wallet, or asset.
///
/// Unique within its namespace. An empty identifier on a creation call
/// means "let the service assign one".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Create a new identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty (service-assigned on creation).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the identifier, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lifecycle status of a ledger-anchored DID entity (wallet or POE record).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DidStatus {
    /// Entity is live and usable
    #[default]
    Active,
    /// Entity is temporarily suspended
    Frozen,
    /// Entity has been permanently revoked
    Revoked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_roundtrip() {
        let id = Identifier::new("did:axn:001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""did:axn:001""#);

        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert_eq!(back.as_str(), "did:axn:001");
    }

    #[test]
    fn test_identifier_empty() {
        let id = Identifier::default();
        assert!(id.is_empty());
        assert!(!Identifier::new("x").is_empty());
    }

    #[test]
    fn test_did_status_wire_values() {
        assert_eq!(serde_json::to_string(&DidStatus::Active).unwrap(), r#""active""#);
        assert_eq!(serde_json::to_string(&DidStatus::Frozen).unwrap(), r#""frozen""#);
        assert_eq!(serde_json::to_string(&DidStatus::Revoked).unwrap(), r#""revoked""#);

        let status: DidStatus = serde_json::from_str(r#""active""#).unwrap();
        assert_eq!(status, DidStatus::Active);
    }
}
