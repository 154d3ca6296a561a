//! Proof-of-existence (POE) record types.
//!
//! A POE record anchors an off-chain document on the ledger by its content
//! hash: the document itself never touches the chain.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::shared::serde_util::base64_bytes;
use crate::shared::{DidStatus, Identifier};

/// Multipart form field carrying the POE identifier on file upload.
pub const OFFCHAIN_POE_ID: &str = "poe_id";
/// Multipart form field carrying the binary file on file upload.
pub const OFFCHAIN_POE_FILE: &str = "poe_file";

/// Multipart form field: signing party identifier.
pub const SIGNATURE_CREATOR: &str = "signature.creator";
/// Multipart form field: signing timestamp.
pub const SIGNATURE_CREATED: &str = "signature.created";
/// Multipart form field: signing nonce.
pub const SIGNATURE_NONCE: &str = "signature.nonce";
/// Multipart form field: base64 signature value.
pub const SIGNATURE_SIGNATURE_VALUE: &str = "signature.signatureValue";

/// Request body for creating or updating a POE record.
///
/// Update calls must carry the identifier of an existing record. The hash
/// and metadata are caller-supplied and forwarded as-is; any verification
/// happens service-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoeBody {
    /// Record identifier; empty on create means service-assigned
    #[serde(default)]
    pub id: Identifier,
    /// Record name
    pub name: String,
    /// Parent record identifier
    #[serde(default)]
    pub parent_id: Identifier,
    /// Owning wallet identifier
    pub owner: Identifier,
    /// Expiry timestamp (Unix seconds)
    #[serde(default)]
    pub expire_time: i64,
    /// Hex SHA-256 content hash of the attested document
    #[serde(default)]
    pub hash: String,
    /// Caller metadata bytes (base64 on the wire)
    #[serde(with = "base64_bytes", default)]
    pub metadata: Vec<u8>,
}

impl PoeBody {
    /// Create a POE body with the required name and owner.
    pub fn new(name: impl Into<String>, owner: impl Into<Identifier>) -> Self {
        Self {
            id: Identifier::default(),
            name: name.into(),
            parent_id: Identifier::default(),
            owner: owner.into(),
            expire_time: 0,
            hash: String::new(),
            metadata: Vec::new(),
        }
    }

    /// Set the record identifier (required for updates).
    pub fn with_id(mut self, id: impl Into<Identifier>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the parent record identifier.
    pub fn with_parent(mut self, parent_id: impl Into<Identifier>) -> Self {
        self.parent_id = parent_id.into();
        self
    }

    /// Set the expiry timestamp.
    pub fn with_expire_time(mut self, expire_time: i64) -> Self {
        self.expire_time = expire_time;
        self
    }

    /// Set the content hash directly (hex SHA-256).
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Compute and set the content hash from the document bytes.
    pub fn with_content(mut self, content: &[u8]) -> Self {
        self.hash = content_hash(content);
        self
    }

    /// Attach metadata bytes.
    pub fn with_metadata(mut self, metadata: Vec<u8>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// POE record as returned by the query endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoePayload {
    /// Record identifier
    pub id: Identifier,
    /// Record name
    pub name: String,
    /// Parent record identifier
    #[serde(default)]
    pub parent_id: Identifier,
    /// Owning wallet identifier
    pub owner: Identifier,
    /// Expiry timestamp (Unix seconds)
    #[serde(default)]
    pub expire_time: i64,
    /// Hex SHA-256 content hash
    #[serde(default)]
    pub hash: String,
    /// Caller metadata bytes (base64 on the wire)
    #[serde(with = "base64_bytes", default)]
    pub metadata: Vec<u8>,
    /// Creation timestamp (Unix seconds)
    #[serde(default)]
    pub created: i64,
    /// Last update timestamp (Unix seconds)
    #[serde(default)]
    pub updated: i64,
    /// Lifecycle status
    pub status: DidStatus,
}

/// Descriptor for a file uploaded to off-chain storage for a POE record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffchainMetadata {
    /// Original filename
    pub filename: String,
    /// Storage endpoint holding the file
    pub endpoint: String,
    /// Storage backend type
    #[serde(rename = "storageType")]
    pub storage_type: String,
    /// Hex SHA-256 hash of the stored content
    #[serde(rename = "contentHash")]
    pub content_hash: String,
    /// File size in bytes
    pub size: u64,
}

/// Hex SHA-256 hash of a document, as carried in [`PoeBody::hash`].
pub fn content_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_is_sha256_hex() {
        // SHA-256 of the empty string
        assert_eq!(
            content_hash(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(content_hash(b"abc").len(), 64);
    }

    #[test]
    fn test_poe_body_builder() {
        let body = PoeBody::new("contract", "did:axn:owner")
            .with_id("poe-1")
            .with_content(b"document bytes")
            .with_metadata(b"notes".to_vec());

        assert_eq!(body.id.as_str(), "poe-1");
        assert_eq!(body.hash, content_hash(b"document bytes"));
        assert_eq!(body.metadata, b"notes");
    }
}
