//! Wire response envelope and per-operation receipts.
//!
//! The service answers every mutating call with one uniform envelope,
//! [`WalletResponse`], whose fields are only partially meaningful per
//! operation. The client never hands the raw envelope to callers: a
//! non-success `code` becomes a typed error, and a success envelope is
//! narrowed into the receipt type for the operation that produced it.

use serde::{Deserialize, Serialize};

use crate::api::error::{WalletError, WalletResult};
use crate::shared::Identifier;
use crate::signing::KeyPair;

/// Envelope `code` value signalling success.
pub const ENVELOPE_SUCCESS_CODE: i32 = 200;

/// Uniform wire envelope returned by every mutating operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletResponse {
    /// Service status code; 200 is success
    pub code: i32,
    /// Human-readable status message
    #[serde(default)]
    pub message: String,
    /// Identifier of the created or mutated entity
    #[serde(default)]
    pub id: Identifier,
    /// Service endpoint hosting the entity
    #[serde(default)]
    pub endpoint: String,
    /// Service-generated keypair, present exactly once on registration
    /// without a caller-supplied public key
    #[serde(default)]
    pub key_pair: Option<KeyPair>,
    /// Creation timestamp (Unix seconds)
    #[serde(default)]
    pub created: i64,
    /// Token id assigned by a colored-token issue
    #[serde(default)]
    pub token_id: String,
    /// Ledger transaction ids produced by the operation
    #[serde(default)]
    pub transaction_ids: Vec<String>,
}

impl WalletResponse {
    /// Translate a non-success envelope `code` into a typed error.
    ///
    /// Envelope codes map through the same table as HTTP statuses, so an
    /// error is never returned as a "successful" structure with the failure
    /// buried inside.
    pub fn ensure_success(self) -> WalletResult<Self> {
        if self.code == ENVELOPE_SUCCESS_CODE {
            Ok(self)
        } else {
            Err(WalletError::from_code(self.code, self.message))
        }
    }
}

/// Result of a wallet or sub-wallet registration.
///
/// `key_pair` is present only when the service generated the keypair; it is
/// the single time the private key crosses the wire, and the caller owns it
/// from here on.
#[derive(Debug, Clone)]
pub struct RegistrationReceipt {
    /// Assigned wallet identifier (never empty)
    pub id: Identifier,
    /// Service endpoint hosting the wallet
    pub endpoint: String,
    /// Service-generated keypair, if the request omitted a public key
    pub key_pair: Option<KeyPair>,
    /// Creation timestamp (Unix seconds)
    pub created: i64,
    /// Ledger transaction ids anchoring the registration
    pub transaction_ids: Vec<String>,
}

impl From<WalletResponse> for RegistrationReceipt {
    fn from(resp: WalletResponse) -> Self {
        Self {
            id: resp.id,
            endpoint: resp.endpoint,
            key_pair: resp.key_pair,
            created: resp.created,
            transaction_ids: resp.transaction_ids,
        }
    }
}

/// Result of a POE create, update, or file upload.
#[derive(Debug, Clone)]
pub struct PoeReceipt {
    /// POE record identifier
    pub id: Identifier,
    /// Creation timestamp (Unix seconds)
    pub created: i64,
    /// Ledger transaction ids anchoring the record
    pub transaction_ids: Vec<String>,
}

impl From<WalletResponse> for PoeReceipt {
    fn from(resp: WalletResponse) -> Self {
        Self {
            id: resp.id,
            created: resp.created,
            transaction_ids: resp.transaction_ids,
        }
    }
}

/// Result of a colored-token issue.
#[derive(Debug, Clone)]
pub struct IssueCTokenReceipt {
    /// Id of the newly minted token supply
    pub token_id: String,
    /// Ledger transaction ids of the mint
    pub transaction_ids: Vec<String>,
}

impl From<WalletResponse> for IssueCTokenReceipt {
    fn from(resp: WalletResponse) -> Self {
        Self {
            token_id: resp.token_id,
            transaction_ids: resp.transaction_ids,
        }
    }
}

/// Result of a digital-asset issue.
#[derive(Debug, Clone)]
pub struct IssueAssetReceipt {
    /// Ledger transaction ids of the issue
    pub transaction_ids: Vec<String>,
}

impl From<WalletResponse> for IssueAssetReceipt {
    fn from(resp: WalletResponse) -> Self {
        Self {
            transaction_ids: resp.transaction_ids,
        }
    }
}

/// Result of a colored-token or asset transfer.
#[derive(Debug, Clone)]
pub struct TransferReceipt {
    /// Ledger transaction ids of the transfer
    pub transaction_ids: Vec<String>,
}

impl From<WalletResponse> for TransferReceipt {
    fn from(resp: WalletResponse) -> Self {
        Self {
            transaction_ids: resp.transaction_ids,
        }
    }
}
