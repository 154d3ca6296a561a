//! Wallet service HTTP client.
//!
//! The [`WalletClient`] marshals typed request bodies into signed or
//! unsigned HTTP calls against the wallet service and translates responses
//! into typed results or typed errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use axchain_wallet_sdk::api::{InvokeOptions, WalletClient};
//! use axchain_wallet_sdk::api::types::{RegisterWalletBody, WalletType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WalletClient::new("https://wallet.axchain.io")?;
//!     let opts = InvokeOptions::default();
//!
//!     let body = RegisterWalletBody::new(WalletType::Independent, "alice", "pw");
//!     let receipt = client.register(&opts, &body).await?;
//!     println!("wallet id: {}", receipt.id);
//!
//!     let info = client.get_wallet_info(&opts, &receipt.id).await?;
//!     println!("status: {:?}", info.status);
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::api::error::{ErrorEnvelope, WalletError, WalletResult};
use crate::api::types::*;
use crate::network;
use crate::shared::Identifier;
use crate::signing::{SignatureBody, SignatureParam, SignedRequest};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blockchain invocation mode, selected per request.
///
/// In `Async` mode (the default) a mutating call returns as soon as the
/// service accepts the request, before ledger confirmation. In `Sync` mode
/// the call blocks until the transaction is confirmed on the ledger, bounded
/// by the request timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvokeMode {
    /// Return after service acceptance (no `BC-Invoke-Mode` header)
    #[default]
    Async,
    /// Block until ledger confirmation (`BC-Invoke-Mode: sync`)
    Sync,
}

impl InvokeMode {
    /// Header value for this mode; `None` means the header is omitted.
    pub fn header_value(&self) -> Option<&'static str> {
        match self {
            Self::Async => None,
            Self::Sync => Some("sync"),
        }
    }
}

/// Per-request options: invocation mode, extra headers, timeout override.
///
/// The invocation mode is request-scoped, not client-wide, so one client
/// instance may serve synchronous and asynchronous callers concurrently.
#[derive(Debug, Clone, Default)]
pub struct InvokeOptions {
    /// Blockchain invocation mode
    pub mode: InvokeMode,
    /// Extra headers for this request (e.g. authentication)
    pub headers: Vec<(String, String)>,
    /// Per-request timeout override. Under `Sync` mode this bounds the
    /// confirmation wait; on expiry the call fails with a timeout whose
    /// outcome is unknown.
    pub timeout: Option<Duration>,
}

impl InvokeOptions {
    /// Options with all defaults (asynchronous invocation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Options selecting synchronous invocation.
    pub fn sync() -> Self {
        Self {
            mode: InvokeMode::Sync,
            ..Self::default()
        }
    }

    /// Set the invocation mode.
    pub fn with_mode(mut self, mode: InvokeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Add a header to this request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve the options into a header map.
    fn header_map(&self) -> WalletResult<HeaderMap> {
        let mut map = HeaderMap::new();
        if let Some(value) = self.mode.header_value() {
            let name = HeaderName::from_bytes(network::INVOKE_MODE_HEADER.as_bytes())
                .map_err(|e| WalletError::InvalidInput(format!("invalid invoke-mode header: {}", e)))?;
            map.insert(name, HeaderValue::from_static(value));
        }
        for (name, value) in &self.headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| WalletError::InvalidInput(format!("invalid header name '{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| WalletError::InvalidInput(format!("invalid header value for '{}': {}", name, e)))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

/// Retry configuration for read operations.
///
/// Retries apply only to the pure reads (balance, info, POE query,
/// transaction logs); mutating operations are never retried internally
/// since they carry no idempotency keys.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (0 = disabled)
    pub max_retries: u32,
    /// Base delay before first retry (ms)
    pub base_delay_ms: u64,
    /// Maximum delay between retries (ms)
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            base_delay_ms: 100,
            max_delay_ms: 10_000,
        }
    }
}

impl RetryConfig {
    /// Create a retry config with the given max retries.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// Set the base delay in milliseconds.
    pub fn with_base_delay_ms(mut self, ms: u64) -> Self {
        self.base_delay_ms = ms;
        self
    }

    /// Set the maximum delay in milliseconds.
    pub fn with_max_delay_ms(mut self, ms: u64) -> Self {
        self.max_delay_ms = ms;
        self
    }

    /// Calculate delay for a given attempt with exponential backoff and jitter.
    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exp_delay = self.base_delay_ms.saturating_mul(1 << attempt.min(10));
        let capped_delay = exp_delay.min(self.max_delay_ms);
        // Jitter: 75-100% of calculated delay
        let jitter_range = capped_delay / 4;
        let jitter = rand::random::<u64>() % (jitter_range + 1);
        Duration::from_millis(capped_delay - jitter_range + jitter)
    }
}

/// Builder for configuring [`WalletClient`].
#[derive(Debug, Clone)]
pub struct WalletClientBuilder {
    base_url: String,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    retry_config: RetryConfig,
}

impl WalletClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
            retry_config: RetryConfig::default(),
        }
    }

    /// Set the default request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the default timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Enable retries with exponential backoff for read operations.
    pub fn with_retry(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Build the client.
    pub fn build(self) -> WalletResult<WalletClient> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );

        for (name, value) in self.default_headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| WalletError::InvalidInput(format!("invalid header name '{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(&value)
                .map_err(|e| WalletError::InvalidInput(format!("invalid header value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        let http_client = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .build()?;

        Ok(WalletClient {
            http_client,
            base_url: self.base_url,
            retry_config: self.retry_config,
        })
    }
}

/// How a mutating request obtains its signature.
///
/// The two variants are mutually exclusive by construction: a request is
/// signed either with a caller-supplied detached signature or with
/// caller-supplied key material, never both.
enum SigningStrategy<'a> {
    /// Caller ran an external signing tool over the canonical payload
    Detached(&'a SignatureBody),
    /// SDK signs the canonical payload with the caller's key material
    KeyMaterial(&'a SignatureParam),
}

impl SigningStrategy<'_> {
    fn seal(&self, payload: String) -> WalletResult<SignedRequest> {
        match self {
            Self::Detached(signature) => Ok(SignedRequest::detached(payload, (*signature).clone())),
            Self::KeyMaterial(param) => Ok(SignedRequest::sign(payload, param)?),
        }
    }
}

/// AXChain wallet service client.
///
/// Stateless and safe for concurrent use: each call is an independent
/// request/response exchange, and the only shared resource is the pooled
/// `reqwest` transport. Cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct WalletClient {
    http_client: Client,
    base_url: String,
    retry_config: RetryConfig,
}

impl WalletClient {
    /// Create a new client with default settings (30s timeout, pooled transport).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> WalletResult<Self> {
        WalletClientBuilder::new(base_url).build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder(base_url: impl Into<String>) -> WalletClientBuilder {
        WalletClientBuilder::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }

    /// Execute a read with retry logic and decode the body as `T`.
    async fn get_with_retry<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        opts: &InvokeOptions,
    ) -> WalletResult<T> {
        let headers = opts.header_map()?;
        let timeout = opts.timeout;
        let mut attempt = 0;

        loop {
            let mut request = self.http_client.get(url).headers(headers.clone());
            if let Some(t) = timeout {
                request = request.timeout(t);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        return response.json::<T>().await.map_err(|e| {
                            WalletError::Deserialize(format!("failed to decode response: {}", e))
                        });
                    }

                    let error = self.parse_error_response(response).await;

                    if attempt < self.retry_config.max_retries && Self::is_retryable_status(status) {
                        let delay = self.retry_config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max_retries = self.retry_config.max_retries,
                            delay_ms = delay.as_millis(),
                            status = %status,
                            "retrying read after error"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    return Err(error);
                }
                Err(e) => {
                    let is_retryable = e.is_connect() || e.is_timeout() || e.is_request();

                    if attempt < self.retry_config.max_retries && is_retryable {
                        let delay = self.retry_config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max_retries = self.retry_config.max_retries,
                            delay_ms = delay.as_millis(),
                            error = %e,
                            "retrying read after network error"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    return Err(e.into());
                }
            }
        }
    }

    /// POST a JSON body and decode the uniform response envelope.
    ///
    /// Mutations are dispatched exactly once: no internal retry.
    async fn post_envelope<B: Serialize + ?Sized>(
        &self,
        route: &str,
        opts: &InvokeOptions,
        body: &B,
    ) -> WalletResult<WalletResponse> {
        let headers = opts.header_map()?;
        let mut request = self.http_client.post(self.url(route)).headers(headers).json(body);
        if let Some(t) = opts.timeout {
            request = request.timeout(t);
        }

        tracing::debug!(route, mode = ?opts.mode, "dispatching wallet mutation");
        let response = request.send().await?;
        self.handle_envelope(response).await
    }

    /// Serialize the body to its canonical payload, seal it with the given
    /// signing strategy, and POST the signed request.
    async fn signed_mutation<B: Serialize>(
        &self,
        route: &str,
        opts: &InvokeOptions,
        body: &B,
        strategy: SigningStrategy<'_>,
    ) -> WalletResult<WalletResponse> {
        let payload = serde_json::to_string(body)
            .map_err(|e| WalletError::InvalidInput(format!("unserializable request body: {}", e)))?;
        let request = strategy.seal(payload)?;
        self.post_envelope(route, opts, &request).await
    }

    /// Decode a mutation response and translate envelope codes.
    async fn handle_envelope(&self, response: reqwest::Response) -> WalletResult<WalletResponse> {
        let status = response.status();
        if !status.is_success() {
            return Err(self.parse_error_response(response).await);
        }

        let envelope = response.json::<WalletResponse>().await.map_err(|e| {
            WalletError::Deserialize(format!("failed to decode response envelope: {}", e))
        })?;
        envelope.ensure_success()
    }

    /// Parse a non-2xx response into a typed error.
    async fn parse_error_response(&self, response: reqwest::Response) -> WalletError {
        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("failed to read error response body: {}", e);
                return WalletError::from_code(
                    status.as_u16() as i32,
                    format!("HTTP {} (body unreadable)", status),
                );
            }
        };

        let envelope = serde_json::from_str::<ErrorEnvelope>(&text)
            .unwrap_or_else(|_| ErrorEnvelope::from_text(text));
        let code = envelope.code.unwrap_or(status.as_u16() as i32);
        WalletError::from_code(code, envelope.get_message())
    }

    fn is_retryable_status(status: StatusCode) -> bool {
        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
    }

    // =========================================================================
    // Validation helpers
    // =========================================================================

    fn validate_required(value: &str, field: &str) -> WalletResult<()> {
        if value.is_empty() {
            return Err(WalletError::InvalidInput(format!("{} cannot be empty", field)));
        }
        Ok(())
    }

    fn validate_identifier(id: &Identifier, field: &str) -> WalletResult<()> {
        Self::validate_required(id.as_str(), field)
    }

    fn validate_register(body: &RegisterWalletBody) -> WalletResult<()> {
        Self::validate_required(&body.access, "access")?;
        Self::validate_required(&body.secret, "secret")
    }

    fn validate_sub_wallet(body: &RegisterSubWalletBody) -> WalletResult<()> {
        Self::validate_identifier(&body.id, "parent wallet id")
    }

    fn validate_poe(body: &PoeBody, require_id: bool) -> WalletResult<()> {
        if require_id {
            Self::validate_identifier(&body.id, "poe id")?;
        }
        Self::validate_required(&body.name, "name")?;
        Self::validate_identifier(&body.owner, "owner")?;
        if !body.hash.is_empty() {
            hex::decode(&body.hash)
                .map_err(|_| WalletError::InvalidInput("hash is not valid hex".to_string()))?;
        }
        Ok(())
    }

    fn validate_issue_ctoken(body: &IssueCTokenBody) -> WalletResult<()> {
        Self::validate_identifier(&body.issuer, "issuer")?;
        Self::validate_identifier(&body.owner, "owner")?;
        Self::validate_required(&body.asset_id, "asset_id")?;
        if body.amount <= 0 {
            return Err(WalletError::InvalidInput("amount must be positive".to_string()));
        }
        Ok(())
    }

    fn validate_issue_asset(body: &IssueAssetBody) -> WalletResult<()> {
        Self::validate_identifier(&body.issuer, "issuer")?;
        Self::validate_identifier(&body.owner, "owner")?;
        Self::validate_required(&body.asset_id, "asset_id")
    }

    fn validate_transfer_ctoken(body: &TransferCTokenBody) -> WalletResult<()> {
        Self::validate_identifier(&body.from, "from")?;
        Self::validate_identifier(&body.to, "to")?;
        if body.tokens.is_empty() {
            return Err(WalletError::InvalidInput("tokens cannot be empty".to_string()));
        }
        for token in &body.tokens {
            Self::validate_required(&token.token_id, "token_id")?;
            if token.amount <= 0 {
                return Err(WalletError::InvalidInput(format!(
                    "amount for token {} must be positive",
                    token.token_id
                )));
            }
        }
        Ok(())
    }

    fn validate_transfer_asset(body: &TransferAssetBody) -> WalletResult<()> {
        Self::validate_identifier(&body.from, "from")?;
        Self::validate_identifier(&body.to, "to")?;
        if body.assets.is_empty() {
            return Err(WalletError::InvalidInput("assets cannot be empty".to_string()));
        }
        for asset in &body.assets {
            Self::validate_required(asset, "asset id")?;
        }
        Ok(())
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a top-level wallet.
    ///
    /// An empty `id` asks the service to assign one. If no public key is
    /// supplied the service generates a keypair and returns it exactly once
    /// in the receipt; the private key is never retained or logged by the
    /// client.
    pub async fn register(
        &self,
        opts: &InvokeOptions,
        body: &RegisterWalletBody,
    ) -> WalletResult<RegistrationReceipt> {
        Self::validate_register(body)?;
        self.post_envelope(network::ROUTE_WALLET_REGISTER, opts, body)
            .await
            .map(Into::into)
    }

    /// Register a sub-wallet under an existing wallet.
    pub async fn register_sub_wallet(
        &self,
        opts: &InvokeOptions,
        body: &RegisterSubWalletBody,
    ) -> WalletResult<RegistrationReceipt> {
        Self::validate_sub_wallet(body)?;
        self.post_envelope(network::ROUTE_WALLET_REGISTER_SUBWALLET, opts, body)
            .await
            .map(Into::into)
    }

    // =========================================================================
    // Wallet queries
    // =========================================================================

    /// Get the colored-token and digital-asset balances of a wallet.
    ///
    /// Fails with [`WalletError::NotFound`] if the identifier is unknown.
    pub async fn get_wallet_balance(
        &self,
        opts: &InvokeOptions,
        id: &Identifier,
    ) -> WalletResult<WalletBalance> {
        Self::validate_identifier(id, "id")?;
        let url = format!(
            "{}?id={}",
            self.url(network::ROUTE_WALLET_BALANCE),
            urlencoding::encode(id.as_str())
        );
        self.get_with_retry(&url, opts).await
    }

    /// Get wallet base information, including its sub-wallets.
    ///
    /// Fails with [`WalletError::NotFound`] if the identifier is unknown.
    /// The response never contains key material.
    pub async fn get_wallet_info(
        &self,
        opts: &InvokeOptions,
        id: &Identifier,
    ) -> WalletResult<WalletInfo> {
        Self::validate_identifier(id, "id")?;
        let url = format!(
            "{}?id={}",
            self.url(network::ROUTE_WALLET_INFO),
            urlencoding::encode(id.as_str())
        );
        self.get_with_retry(&url, opts).await
    }

    // =========================================================================
    // Proof of existence
    // =========================================================================

    /// Create a POE record with a pre-computed signature.
    ///
    /// The signature must cover the canonical JSON serialization of `body`.
    pub async fn create_poe(
        &self,
        opts: &InvokeOptions,
        body: &PoeBody,
        signature: &SignatureBody,
    ) -> WalletResult<PoeReceipt> {
        Self::validate_poe(body, false)?;
        self.signed_mutation(network::ROUTE_POE_CREATE, opts, body, SigningStrategy::Detached(signature))
            .await
            .map(Into::into)
    }

    /// Create a POE record, signing the payload with the given key material.
    pub async fn create_poe_sign(
        &self,
        opts: &InvokeOptions,
        body: &PoeBody,
        param: &SignatureParam,
    ) -> WalletResult<PoeReceipt> {
        Self::validate_poe(body, false)?;
        self.signed_mutation(network::ROUTE_POE_CREATE, opts, body, SigningStrategy::KeyMaterial(param))
            .await
            .map(Into::into)
    }

    /// Update an existing POE record with a pre-computed signature.
    ///
    /// The record identifier must reference an existing record; the service
    /// answers [`WalletError::NotFound`] otherwise.
    pub async fn update_poe(
        &self,
        opts: &InvokeOptions,
        body: &PoeBody,
        signature: &SignatureBody,
    ) -> WalletResult<PoeReceipt> {
        Self::validate_poe(body, true)?;
        self.signed_mutation(network::ROUTE_POE_UPDATE, opts, body, SigningStrategy::Detached(signature))
            .await
            .map(Into::into)
    }

    /// Update an existing POE record, signing the payload with the given key material.
    pub async fn update_poe_sign(
        &self,
        opts: &InvokeOptions,
        body: &PoeBody,
        param: &SignatureParam,
    ) -> WalletResult<PoeReceipt> {
        Self::validate_poe(body, true)?;
        self.signed_mutation(network::ROUTE_POE_UPDATE, opts, body, SigningStrategy::KeyMaterial(param))
            .await
            .map(Into::into)
    }

    /// Query a POE record by identifier.
    ///
    /// Fails with [`WalletError::NotFound`] if the record does not exist.
    pub async fn query_poe(
        &self,
        opts: &InvokeOptions,
        id: &Identifier,
    ) -> WalletResult<PoePayload> {
        Self::validate_identifier(id, "id")?;
        let url = format!(
            "{}?id={}",
            self.url(network::ROUTE_POE_QUERY),
            urlencoding::encode(id.as_str())
        );
        self.get_with_retry(&url, opts).await
    }

    /// Upload a file for a previously created POE record.
    ///
    /// The only non-JSON operation: the content goes up as a multipart form
    /// with `poe_id` and `poe_file` fields plus the detached-signature
    /// fields. The POE record must already exist.
    pub async fn upload_poe_file(
        &self,
        opts: &InvokeOptions,
        poe_id: &Identifier,
        filename: &str,
        content: Vec<u8>,
        signature: &SignatureBody,
    ) -> WalletResult<PoeReceipt> {
        Self::validate_identifier(poe_id, "poe_id")?;
        Self::validate_required(filename, "filename")?;
        if content.is_empty() {
            return Err(WalletError::InvalidInput("file content cannot be empty".to_string()));
        }

        let form = reqwest::multipart::Form::new()
            .text(OFFCHAIN_POE_ID, poe_id.to_string())
            .part(
                OFFCHAIN_POE_FILE,
                reqwest::multipart::Part::bytes(content).file_name(filename.to_string()),
            )
            .text(SIGNATURE_CREATOR, signature.creator.to_string())
            .text(SIGNATURE_CREATED, signature.created.to_string())
            .text(SIGNATURE_NONCE, signature.nonce.clone())
            .text(SIGNATURE_SIGNATURE_VALUE, signature.signature_value.clone());

        let headers = opts.header_map()?;
        let mut request = self
            .http_client
            .post(self.url(network::ROUTE_POE_UPLOAD))
            .headers(headers)
            .multipart(form);
        if let Some(t) = opts.timeout {
            request = request.timeout(t);
        }

        tracing::debug!(route = network::ROUTE_POE_UPLOAD, "uploading POE file");
        let response = request.send().await?;
        self.handle_envelope(response).await.map(Into::into)
    }

    // =========================================================================
    // Colored tokens and assets
    // =========================================================================

    /// Issue colored tokens with a pre-computed signature.
    pub async fn issue_ctoken(
        &self,
        opts: &InvokeOptions,
        body: &IssueCTokenBody,
        signature: &SignatureBody,
    ) -> WalletResult<IssueCTokenReceipt> {
        Self::validate_issue_ctoken(body)?;
        self.signed_mutation(network::ROUTE_TOKENS_ISSUE, opts, body, SigningStrategy::Detached(signature))
            .await
            .map(Into::into)
    }

    /// Issue colored tokens, signing the payload with the given key material.
    pub async fn issue_ctoken_sign(
        &self,
        opts: &InvokeOptions,
        body: &IssueCTokenBody,
        param: &SignatureParam,
    ) -> WalletResult<IssueCTokenReceipt> {
        Self::validate_issue_ctoken(body)?;
        self.signed_mutation(network::ROUTE_TOKENS_ISSUE, opts, body, SigningStrategy::KeyMaterial(param))
            .await
            .map(Into::into)
    }

    /// Issue a digital asset with a pre-computed signature.
    pub async fn issue_asset(
        &self,
        opts: &InvokeOptions,
        body: &IssueAssetBody,
        signature: &SignatureBody,
    ) -> WalletResult<IssueAssetReceipt> {
        Self::validate_issue_asset(body)?;
        self.signed_mutation(network::ROUTE_ASSETS_ISSUE, opts, body, SigningStrategy::Detached(signature))
            .await
            .map(Into::into)
    }

    /// Issue a digital asset, signing the payload with the given key material.
    pub async fn issue_asset_sign(
        &self,
        opts: &InvokeOptions,
        body: &IssueAssetBody,
        param: &SignatureParam,
    ) -> WalletResult<IssueAssetReceipt> {
        Self::validate_issue_asset(body)?;
        self.signed_mutation(network::ROUTE_ASSETS_ISSUE, opts, body, SigningStrategy::KeyMaterial(param))
            .await
            .map(Into::into)
    }

    /// Transfer colored tokens with a pre-computed signature.
    ///
    /// Fails with [`WalletError::InsufficientFunds`] when the source wallet
    /// lacks sufficient unspent balance; the check happens on the ledger.
    pub async fn transfer_ctoken(
        &self,
        opts: &InvokeOptions,
        body: &TransferCTokenBody,
        signature: &SignatureBody,
    ) -> WalletResult<TransferReceipt> {
        Self::validate_transfer_ctoken(body)?;
        self.signed_mutation(network::ROUTE_TOKENS_TRANSFER, opts, body, SigningStrategy::Detached(signature))
            .await
            .map(Into::into)
    }

    /// Transfer colored tokens, signing the payload with the given key material.
    pub async fn transfer_ctoken_sign(
        &self,
        opts: &InvokeOptions,
        body: &TransferCTokenBody,
        param: &SignatureParam,
    ) -> WalletResult<TransferReceipt> {
        Self::validate_transfer_ctoken(body)?;
        self.signed_mutation(network::ROUTE_TOKENS_TRANSFER, opts, body, SigningStrategy::KeyMaterial(param))
            .await
            .map(Into::into)
    }

    /// Transfer digital assets with a pre-computed signature.
    pub async fn transfer_asset(
        &self,
        opts: &InvokeOptions,
        body: &TransferAssetBody,
        signature: &SignatureBody,
    ) -> WalletResult<TransferReceipt> {
        Self::validate_transfer_asset(body)?;
        self.signed_mutation(network::ROUTE_ASSETS_TRANSFER, opts, body, SigningStrategy::Detached(signature))
            .await
            .map(Into::into)
    }

    /// Transfer digital assets, signing the payload with the given key material.
    pub async fn transfer_asset_sign(
        &self,
        opts: &InvokeOptions,
        body: &TransferAssetBody,
        param: &SignatureParam,
    ) -> WalletResult<TransferReceipt> {
        Self::validate_transfer_asset(body)?;
        self.signed_mutation(network::ROUTE_ASSETS_TRANSFER, opts, body, SigningStrategy::KeyMaterial(param))
            .await
            .map(Into::into)
    }

    // =========================================================================
    // Transaction logs
    // =========================================================================

    /// Query income (`in`) or spending (`out`) transaction logs for a wallet.
    ///
    /// Returns logs partitioned per remote endpoint. The direction is typed;
    /// parse caller-supplied strings through [`TxDirection::from_str`], which
    /// rejects anything other than `"in"` and `"out"`.
    ///
    /// [`TxDirection::from_str`]: std::str::FromStr::from_str
    pub async fn query_transaction_logs(
        &self,
        opts: &InvokeOptions,
        id: &Identifier,
        direction: TxDirection,
    ) -> WalletResult<TransactionLogs> {
        Self::validate_identifier(id, "id")?;
        let url = format!(
            "{}?id={}&type={}",
            self.url(network::ROUTE_TRANSACTION_LOGS),
            urlencoding::encode(id.as_str()),
            direction.as_str()
        );
        self.get_with_retry(&url, opts).await
    }
}
