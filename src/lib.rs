//! # AXChain Wallet SDK
//!
//! A Rust SDK for the AXChain blockchain-backed wallet service: typed
//! request/response contracts and an HTTP/JSON client for wallet
//! registration, proof-of-existence records, colored-token and
//! digital-asset operations, and transaction-log queries.
//!
//! ## Modules
//!
//! - [`api`]: HTTP client and the typed API surface (requires the `api`
//!   feature, enabled by default)
//! - [`signing`]: request signing envelope, keypairs, embedded Ed25519
//!   signing and verification
//! - [`shared`]: identifier and status types shared across modules
//! - [`network`]: service URL, route, and header constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use axchain_wallet_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WalletClient::new("https://wallet.axchain.io")?;
//!     let opts = InvokeOptions::default();
//!
//!     // Register a wallet; the service generates the keypair and
//!     // returns it exactly once.
//!     let body = RegisterWalletBody::new(WalletType::Independent, "alice", "pw");
//!     let receipt = client.register(&opts, &body).await?;
//!     let key_pair = receipt.key_pair.expect("generated keypair");
//!
//!     // Anchor a document by its content hash, signing with the
//!     // wallet's private key.
//!     let poe = PoeBody::new("contract", receipt.id.clone())
//!         .with_content(b"document bytes");
//!     let param = SignatureParam::new(receipt.id.clone(), key_pair.private_key.clone());
//!     let poe_receipt = client.create_poe_sign(&opts, &poe, &param).await?;
//!     println!("anchored as {}", poe_receipt.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Signing Variants
//!
//! Every signed operation comes in two forms sharing one body type:
//! the plain form (`create_poe`, `issue_ctoken`, ...) takes a detached
//! [`signing::SignatureBody`] the caller computed with an external signing
//! tool, and the `_sign` form (`create_poe_sign`, `issue_ctoken_sign`, ...)
//! takes a [`signing::SignatureParam`] with key material and signs inside
//! the SDK. The two paths are mutually exclusive; a request is never
//! re-signed.

// ============================================================================
// MODULES
// ============================================================================

/// Network URL, route, and header constants for the wallet service.
pub mod network;

/// Shared identifier and status types.
pub mod shared;

/// Request signing: signature envelope, keypairs, embedded Ed25519 signing.
pub mod signing;

/// HTTP client module for the wallet service API.
#[cfg(feature = "api")]
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use axchain_wallet_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::shared::{DidStatus, Identifier};

    pub use crate::signing::{
        KeyPair, SignatureBody, SignatureParam, SignedRequest, SigningError, SigningResult,
    };

    #[cfg(feature = "api")]
    pub use crate::api::{
        // Client
        InvokeMode, InvokeOptions, RetryConfig, WalletClient, WalletClientBuilder,
        // Errors
        WalletError, WalletResult,
        // Registration and wallet queries
        AssetBalance, CTokenBalance, RegisterSubWalletBody, RegisterWalletBody, SubWalletInfo,
        SubWalletType, WalletBalance, WalletInfo, WalletType,
        // Proof of existence
        OffchainMetadata, PoeBody, PoePayload,
        // Tokens, assets, and fees
        AxtAmount, Fee, IssueAssetBody, IssueCTokenBody, TokenAmount, TransferAssetBody,
        TransferCTokenBody,
        // Transaction logs
        SpentTxOut, TransactionLog, TransactionLogs, TxDirection, Utxo,
        // Receipts
        IssueAssetReceipt, IssueCTokenReceipt, PoeReceipt, RegistrationReceipt, TransferReceipt,
    };
}
