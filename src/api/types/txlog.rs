//! Transaction log types: UTXO accounting records.
//!
//! The ledger tracks colored-token value as transaction outputs. An output
//! is unspent ([`Utxo`]) until exactly one later transaction consumes it,
//! at which point it appears as a [`SpentTxOut`]; the ledger enforces
//! single-spend.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::shared::serde_util::base64_bytes;

/// Transaction logs keyed by remote endpoint.
pub type TransactionLogs = HashMap<String, TransactionLog>;

/// Protobuf-style timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    /// Seconds since the Unix epoch
    #[serde(default)]
    pub seconds: i64,
    /// Sub-second nanoseconds
    #[serde(default)]
    pub nanos: i32,
}

/// Unspent and spent transaction outputs for one endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionLog {
    /// Unspent transaction outputs
    #[serde(default)]
    pub utxo: Vec<Utxo>,
    /// Spent transaction outputs
    #[serde(default)]
    pub stxo: Vec<SpentTxOut>,
}

/// Unspent transaction output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utxo {
    /// Double-SHA256 hash of the creating transaction
    #[serde(default)]
    pub source_tx_data_hash: String,
    /// Index into the transaction's output array
    #[serde(default)]
    pub ix: u32,
    /// Colored token id
    #[serde(default)]
    pub c_token_id: String,
    /// Color type tag
    #[serde(default)]
    pub c_type: i32,
    /// Token amount
    #[serde(default)]
    pub value: i64,
    /// Recipient address
    #[serde(default)]
    pub addr: String,
    /// Timestamp before which the output cannot be spent; -1 = unconstrained
    #[serde(default)]
    pub until: i64,
    /// Locking script (base64 on the wire)
    #[serde(with = "base64_bytes", default)]
    pub script: Vec<u8>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    /// Wallet that created the transaction
    #[serde(default)]
    pub founder: String,
    /// Transaction type tag
    #[serde(default)]
    pub tx_type: i32,
    /// Blockchain transaction id
    #[serde(default, rename = "bcTxID")]
    pub bc_tx_id: String,
}

/// Spent transaction output: a [`Utxo`] consumed by a later transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpentTxOut {
    /// Double-SHA256 hash of the creating transaction
    #[serde(default)]
    pub source_tx_data_hash: String,
    /// Index into the transaction's output array
    #[serde(default)]
    pub ix: u32,
    /// Colored token id
    #[serde(default)]
    pub c_token_id: String,
    /// Color type tag
    #[serde(default)]
    pub c_type: i32,
    /// Token amount
    #[serde(default)]
    pub value: i64,
    /// Recipient address
    #[serde(default)]
    pub addr: String,
    /// Timestamp before which the output could not be spent; -1 = unconstrained
    #[serde(default)]
    pub until: i64,
    /// Locking script (base64 on the wire)
    #[serde(with = "base64_bytes", default)]
    pub script: Vec<u8>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    /// Double-SHA256 hash of the spending transaction
    #[serde(default)]
    pub spent_tx_data_hash: String,
    /// Spend time
    #[serde(default)]
    pub spent_at: Option<Timestamp>,
    /// Wallet that created the transaction
    #[serde(default)]
    pub founder: String,
    /// Transaction type tag
    #[serde(default)]
    pub tx_type: i32,
    /// Blockchain transaction id
    #[serde(default, rename = "bcTxID")]
    pub bc_tx_id: String,
}

/// Direction selector for transaction-log queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxDirection {
    /// Income transactions (value received by the wallet)
    In,
    /// Spending transactions (value spent by the wallet)
    Out,
}

impl TxDirection {
    /// Wire value used in the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl std::fmt::Display for TxDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown transaction-log direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDirectionError(pub String);

impl std::fmt::Display for InvalidDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid transaction direction: {:?} (expected \"in\" or \"out\")", self.0)
    }
}

impl std::error::Error for InvalidDirectionError {}

impl std::str::FromStr for TxDirection {
    type Err = InvalidDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            other => Err(InvalidDirectionError(other.to_string())),
        }
    }
}
