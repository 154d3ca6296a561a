//! HTTP client module for the AXChain wallet service.
//!
//! Provides a type-safe client for wallet registration, balance and info
//! queries, proof-of-existence records, colored-token and digital-asset
//! issuance/transfer, and transaction-log queries.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use axchain_wallet_sdk::api::{InvokeOptions, WalletClient};
//! use axchain_wallet_sdk::api::types::{RegisterWalletBody, WalletType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WalletClient::new("https://wallet.axchain.io")?;
//!
//!     let body = RegisterWalletBody::new(WalletType::Independent, "alice", "pw");
//!     let receipt = client.register(&InvokeOptions::default(), &body).await?;
//!     println!("wallet id: {}", receipt.id);
//!     Ok(())
//! }
//! ```
//!
//! # Invocation Modes
//!
//! Every mutating call carries a request-scoped invocation mode. The default
//! is asynchronous: the call returns once the service accepts the request,
//! before ledger confirmation. [`InvokeOptions::sync`] sends the
//! `BC-Invoke-Mode: sync` header and blocks until the transaction is
//! confirmed, bounded by the request timeout:
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use axchain_wallet_sdk::api::InvokeOptions;
//!
//! let opts = InvokeOptions::sync().with_timeout(Duration::from_secs(120));
//! ```
//!
//! A timeout in synchronous mode means *unknown outcome*: the mutation may
//! still have been accepted. Poll the query APIs instead of retrying.
//!
//! # Error Handling
//!
//! All methods return `WalletResult<T>`, an alias for
//! `Result<T, WalletError>`:
//!
//! ```rust,ignore
//! use axchain_wallet_sdk::api::{WalletClient, WalletError};
//!
//! match client.get_wallet_info(&opts, &id).await {
//!     Ok(info) => println!("status: {:?}", info.status),
//!     Err(WalletError::NotFound(msg)) => println!("no such wallet: {}", msg),
//!     Err(e) => println!("other error: {}", e),
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{InvokeMode, InvokeOptions, RetryConfig, WalletClient, WalletClientBuilder};
pub use error::{ErrorEnvelope, WalletError, WalletResult};
pub use types::*;
