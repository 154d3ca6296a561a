//! Wallet registration and query types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::shared::{DidStatus, Identifier};

/// Top-level wallet type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WalletType {
    /// Organization-owned wallet
    Organization,
    /// Wallet managed on behalf of another party
    Dependent,
    /// Self-managed wallet
    #[default]
    Independent,
    /// Wallet representing an asset
    Asset,
}

/// Sub-wallet type under a main wallet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubWalletType {
    /// Spendable balance
    #[default]
    Cash,
    /// Fee escrow
    Fee,
    /// Loan principal
    Loan,
    /// Accrued interest
    Interest,
}

/// Request body for registering a top-level wallet.
///
/// An empty `id` asks the service to assign one. An absent `public_key`
/// asks the service to generate a keypair; the private key is returned
/// exactly once in the registration response and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterWalletBody {
    /// Wallet identifier; empty means service-assigned
    #[serde(default)]
    pub id: Identifier,
    /// Wallet type
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    /// Registered user name
    pub access: String,
    /// Registered user phone
    #[serde(default)]
    pub phone: String,
    /// Registered user email
    #[serde(default)]
    pub email: String,
    /// Registered user password
    pub secret: String,
    /// Arbitrary caller metadata
    #[serde(default)]
    pub meta_data: serde_json::Value,
    /// Base64 Ed25519 public key; absent means service-generated keypair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

impl RegisterWalletBody {
    /// Create a registration body with the required access credentials.
    pub fn new(wallet_type: WalletType, access: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: Identifier::default(),
            wallet_type,
            access: access.into(),
            phone: String::new(),
            email: String::new(),
            secret: secret.into(),
            meta_data: serde_json::Value::Null,
            public_key: None,
        }
    }

    /// Set a caller-chosen wallet identifier.
    pub fn with_id(mut self, id: impl Into<Identifier>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the contact phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Set the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Attach arbitrary metadata.
    pub fn with_meta_data(mut self, meta_data: serde_json::Value) -> Self {
        self.meta_data = meta_data;
        self
    }

    /// Supply a caller-held public key instead of a service-generated keypair.
    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }
}

/// Request body for registering a sub-wallet under an existing wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterSubWalletBody {
    /// Parent (main) wallet identifier
    pub id: Identifier,
    /// Sub-wallet type
    #[serde(rename = "type")]
    pub sub_type: SubWalletType,
    /// Base64 Ed25519 public key; absent means service-generated keypair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

impl RegisterSubWalletBody {
    /// Create a sub-wallet registration body under the given parent wallet.
    pub fn new(parent: impl Into<Identifier>, sub_type: SubWalletType) -> Self {
        Self {
            id: parent.into(),
            sub_type,
            public_key: None,
        }
    }

    /// Supply a caller-held public key instead of a service-generated keypair.
    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }
}

/// Colored-token balance entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CTokenBalance {
    /// Colored token id
    pub id: String,
    /// Token amount
    pub amount: i64,
}

/// Digital-asset balance entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetBalance {
    /// Asset id
    pub id: String,
    /// Asset amount
    pub amount: i64,
    /// Asset name
    #[serde(default)]
    pub name: String,
    /// Asset status
    #[serde(default)]
    pub status: i32,
}

/// Balances held by a wallet, keyed by token/asset id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletBalance {
    /// All colored tokens in the wallet
    #[serde(default)]
    pub colored_tokens: HashMap<String, CTokenBalance>,
    /// All digital assets in the wallet
    #[serde(default)]
    pub digital_assets: HashMap<String, AssetBalance>,
}

/// Base information for a registered wallet.
///
/// `hds` holds the wallet's sub-wallets keyed by identifier. Sub-wallets
/// are a one-level composition, which [`SubWalletInfo`] enforces by carrying
/// no nested map. No key material ever appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletInfo {
    /// Wallet identifier
    pub id: Identifier,
    /// Wallet type
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    /// Service endpoint hosting the wallet
    #[serde(default)]
    pub endpoint: String,
    /// Lifecycle status
    pub status: DidStatus,
    /// Creation timestamp (Unix seconds)
    #[serde(default)]
    pub created: i64,
    /// Last update timestamp (Unix seconds)
    #[serde(default)]
    pub updated: i64,
    /// Sub-wallets keyed by identifier
    #[serde(default)]
    pub hds: HashMap<Identifier, SubWalletInfo>,
}

/// Base information for a sub-wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubWalletInfo {
    /// Sub-wallet identifier
    pub id: Identifier,
    /// Sub-wallet type
    #[serde(rename = "type")]
    pub sub_type: SubWalletType,
    /// Service endpoint hosting the sub-wallet
    #[serde(default)]
    pub endpoint: String,
    /// Lifecycle status
    pub status: DidStatus,
    /// Creation timestamp (Unix seconds)
    #[serde(default)]
    pub created: i64,
    /// Last update timestamp (Unix seconds)
    #[serde(default)]
    pub updated: i64,
}
