//! Request signing for mutating wallet operations.
//!
//! Mutating calls (POE create/update, issue, transfer) are submitted as a
//! [`SignedRequest`]: the canonical JSON serialization of the operation body
//! plus a detached Ed25519 signature over exactly those bytes.
//!
//! The signature is obtained one of two ways, never both:
//! - **Detached**: the caller ran an external signing tool over the canonical
//!   payload and supplies a ready [`SignatureBody`].
//! - **Embedded**: the caller supplies key material in a [`SignatureParam`]
//!   and the SDK computes the signature via [`sign_payload`].

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::shared::Identifier;

/// Result type alias for signing operations.
pub type SigningResult<T> = Result<T, SigningError>;

/// Errors produced while signing or verifying request payloads.
#[derive(Debug, Error)]
pub enum SigningError {
    /// Key material could not be decoded or parsed
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Signature could not be decoded or has the wrong length
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// Base64 decoding failed
    #[error("base64 decode error: {0}")]
    Base64(String),

    /// Signature did not verify against the payload
    #[error("signature verification failed")]
    VerificationFailed,

    /// The signing creator identifier is empty
    #[error("signature creator cannot be empty")]
    MissingCreator,
}

/// Ed25519 keypair as returned by the wallet service, base64 encoded.
///
/// When a registration call omits the public key, the service generates a
/// keypair and returns it exactly once. The private key never appears in any
/// subsequent read, and `Debug` output redacts it so it cannot leak through
/// logging.
#[derive(Clone, Serialize, Deserialize)]
pub struct KeyPair {
    /// Base64 encoded Ed25519 private key (64-byte keypair form)
    pub private_key: String,
    /// Base64 encoded Ed25519 public key (32 bytes)
    pub public_key: String,
}

impl KeyPair {
    /// Generate a fresh Ed25519 keypair locally.
    ///
    /// The private key is encoded in the 64-byte keypair form the wallet
    /// service uses (seed followed by public key).
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut rand::rngs::OsRng);
        Self {
            private_key: BASE64.encode(signing_key.to_keypair_bytes()),
            public_key: BASE64.encode(signing_key.verifying_key().as_bytes()),
        }
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Detached signature envelope attached to every signed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureBody {
    /// Identifier of the signing party
    pub creator: Identifier,
    /// Unix timestamp at signing time
    pub created: i64,
    /// Single-use nonce
    pub nonce: String,
    /// Base64 encoded Ed25519 signature over the canonical payload
    pub signature_value: String,
}

impl SignatureBody {
    /// Verify this signature against a payload under a base64 public key.
    ///
    /// # Errors
    ///
    /// Returns [`SigningError::VerificationFailed`] on mismatch, or a decode
    /// error if the key or signature is malformed.
    pub fn verify(&self, public_key_b64: &str, payload: &[u8]) -> SigningResult<()> {
        let verifying_key = decode_public_key(public_key_b64)?;
        let sig_bytes = BASE64
            .decode(self.signature_value.as_bytes())
            .map_err(|e| SigningError::Base64(e.to_string()))?;
        let sig_array: [u8; 64] = sig_bytes
            .try_into()
            .map_err(|v: Vec<u8>| SigningError::InvalidSignature(format!("expected 64 bytes, got {}", v.len())))?;
        let signature = Signature::from_bytes(&sig_array);

        verifying_key
            .verify(payload, &signature)
            .map_err(|_| SigningError::VerificationFailed)
    }
}

/// Key material for embedded signing.
///
/// `created` of `0` and an empty `nonce` are filled in at signing time
/// (current Unix timestamp and a fresh UUID v4). `Debug` output redacts the
/// private key. Key material never crosses the wire; this type has no
/// serde impls.
#[derive(Clone)]
pub struct SignatureParam {
    /// Identifier of the signing party
    pub creator: Identifier,
    /// Unix timestamp; 0 means "now"
    pub created: i64,
    /// Single-use nonce; empty means "generate one"
    pub nonce: String,
    /// Base64 encoded Ed25519 private key (32-byte seed or 64-byte keypair)
    pub private_key: String,
}

impl SignatureParam {
    /// Create signing parameters with timestamp and nonce filled at sign time.
    pub fn new(creator: impl Into<Identifier>, private_key: impl Into<String>) -> Self {
        Self {
            creator: creator.into(),
            created: 0,
            nonce: String::new(),
            private_key: private_key.into(),
        }
    }

    /// Pin the signing timestamp instead of using the current time.
    pub fn with_created(mut self, created: i64) -> Self {
        self.created = created;
        self
    }

    /// Pin the nonce instead of generating a fresh UUID.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = nonce.into();
        self
    }
}

impl std::fmt::Debug for SignatureParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureParam")
            .field("creator", &self.creator)
            .field("created", &self.created)
            .field("nonce", &self.nonce)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Wire form of a signed mutating request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedRequest {
    /// Canonical JSON serialization of the operation body
    pub payload: String,
    /// Detached signature over the payload bytes
    pub signature: SignatureBody,
}

impl SignedRequest {
    /// Build a signed request from a pre-computed signature.
    pub fn detached(payload: String, signature: SignatureBody) -> Self {
        Self { payload, signature }
    }

    /// Build a signed request by signing the payload with the given key material.
    ///
    /// # Errors
    ///
    /// Returns an error if the private key is malformed or the creator is empty.
    pub fn sign(payload: String, param: &SignatureParam) -> SigningResult<Self> {
        let signature = sign_payload(&payload, param)?;
        Ok(Self { payload, signature })
    }
}

/// Generate a single-use nonce (UUID v4).
pub fn generate_nonce() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Sign a canonical payload with the given key material.
///
/// Decoded private key bytes are zeroized on drop. A `created` of 0 becomes
/// the current Unix timestamp; an empty nonce becomes a fresh UUID v4.
///
/// # Errors
///
/// Returns an error if the creator is empty or the key cannot be decoded.
pub fn sign_payload(payload: &str, param: &SignatureParam) -> SigningResult<SignatureBody> {
    if param.creator.is_empty() {
        return Err(SigningError::MissingCreator);
    }

    let signing_key = decode_private_key(&param.private_key)?;
    let signature = signing_key.sign(payload.as_bytes());

    let created = if param.created == 0 {
        chrono::Utc::now().timestamp()
    } else {
        param.created
    };
    let nonce = if param.nonce.is_empty() {
        generate_nonce()
    } else {
        param.nonce.clone()
    };

    Ok(SignatureBody {
        creator: param.creator.clone(),
        created,
        nonce,
        signature_value: BASE64.encode(signature.to_bytes()),
    })
}

/// Decode a base64 Ed25519 private key (32-byte seed or 64-byte keypair).
fn decode_private_key(private_key_b64: &str) -> SigningResult<SigningKey> {
    let key_bytes = Zeroizing::new(
        BASE64
            .decode(private_key_b64.trim().as_bytes())
            .map_err(|e| SigningError::Base64(e.to_string()))?,
    );

    match key_bytes.len() {
        32 => {
            let seed: [u8; 32] = key_bytes[..]
                .try_into()
                .map_err(|_| SigningError::InvalidKey("bad seed length".into()))?;
            Ok(SigningKey::from_bytes(&seed))
        }
        64 => {
            let pair: [u8; 64] = key_bytes[..]
                .try_into()
                .map_err(|_| SigningError::InvalidKey("bad keypair length".into()))?;
            SigningKey::from_keypair_bytes(&pair)
                .map_err(|e| SigningError::InvalidKey(e.to_string()))
        }
        n => Err(SigningError::InvalidKey(format!(
            "private key must be 32 or 64 bytes, got {}",
            n
        ))),
    }
}

/// Decode a base64 Ed25519 public key (32 bytes).
fn decode_public_key(public_key_b64: &str) -> SigningResult<VerifyingKey> {
    let key_bytes = BASE64
        .decode(public_key_b64.trim().as_bytes())
        .map_err(|e| SigningError::Base64(e.to_string()))?;
    let key_array: [u8; 32] = key_bytes
        .try_into()
        .map_err(|v: Vec<u8>| SigningError::InvalidKey(format!("public key must be 32 bytes, got {}", v.len())))?;

    VerifyingKey::from_bytes(&key_array).map_err(|e| SigningError::InvalidKey(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_verify() {
        let keypair = KeyPair::generate();
        let param = SignatureParam::new("did:axn:signer", keypair.private_key.clone());

        let payload = r#"{"id":"poe-1","name":"contract"}"#;
        let signature = sign_payload(payload, &param).unwrap();

        assert_eq!(signature.creator.as_str(), "did:axn:signer");
        assert!(signature.created > 0);
        assert!(!signature.nonce.is_empty());
        signature.verify(&keypair.public_key, payload.as_bytes()).unwrap();
    }

    #[test]
    fn test_tampered_payload_fails_verification() {
        let keypair = KeyPair::generate();
        let param = SignatureParam::new("did:axn:signer", keypair.private_key.clone());

        let signature = sign_payload("payload", &param).unwrap();
        let err = signature.verify(&keypair.public_key, b"tampered").unwrap_err();
        assert!(matches!(err, SigningError::VerificationFailed));
    }

    #[test]
    fn test_pinned_created_and_nonce() {
        let keypair = KeyPair::generate();
        let param = SignatureParam::new("did:axn:signer", keypair.private_key)
            .with_created(1_700_000_000)
            .with_nonce("nonce-1");

        let signature = sign_payload("payload", &param).unwrap();
        assert_eq!(signature.created, 1_700_000_000);
        assert_eq!(signature.nonce, "nonce-1");
    }

    #[test]
    fn test_empty_creator_rejected() {
        let keypair = KeyPair::generate();
        let param = SignatureParam::new("", keypair.private_key);
        assert!(matches!(
            sign_payload("payload", &param),
            Err(SigningError::MissingCreator)
        ));
    }

    #[test]
    fn test_seed_form_private_key() {
        // 32-byte seed form signs the same as the 64-byte keypair form
        let signing_key = SigningKey::generate(&mut rand::rngs::OsRng);
        let seed_b64 = BASE64.encode(signing_key.to_bytes());
        let public_b64 = BASE64.encode(signing_key.verifying_key().as_bytes());

        let param = SignatureParam::new("did:axn:signer", seed_b64);
        let signature = sign_payload("payload", &param).unwrap();
        signature.verify(&public_b64, b"payload").unwrap();
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let keypair = KeyPair::generate();
        let debug = format!("{:?}", keypair);
        assert!(!debug.contains(&keypair.private_key));
        assert!(debug.contains("<redacted>"));

        let param = SignatureParam::new("did:axn:signer", keypair.private_key.clone());
        let debug = format!("{:?}", param);
        assert!(!debug.contains(&keypair.private_key));
    }

    #[test]
    fn test_invalid_key_lengths() {
        let param = SignatureParam::new("c", BASE64.encode([0u8; 16]));
        assert!(matches!(
            sign_payload("p", &param),
            Err(SigningError::InvalidKey(_))
        ));
    }
}
