//! Network constants for the AXChain wallet service.

/// Default wallet service base URL.
pub const DEFAULT_API_URL: &str = "https://wallet.axchain.io";

/// Header selecting the blockchain invocation mode (`sync` or `async`).
pub const INVOKE_MODE_HEADER: &str = "BC-Invoke-Mode";

// Versioned routes exposed by the wallet service.

/// Register a top-level wallet.
pub const ROUTE_WALLET_REGISTER: &str = "/v1/wallet/register";
/// Register a sub-wallet under an existing wallet.
pub const ROUTE_WALLET_REGISTER_SUBWALLET: &str = "/v1/wallet/register/subwallet";
/// Query wallet balances.
pub const ROUTE_WALLET_BALANCE: &str = "/v1/wallet/balance";
/// Query wallet base information.
pub const ROUTE_WALLET_INFO: &str = "/v1/wallet/info";
/// Create a POE record.
pub const ROUTE_POE_CREATE: &str = "/v1/poe/create";
/// Update an existing POE record.
pub const ROUTE_POE_UPDATE: &str = "/v1/poe/update";
/// Query a POE record.
pub const ROUTE_POE_QUERY: &str = "/v1/poe";
/// Upload a file for a POE record (multipart form).
pub const ROUTE_POE_UPLOAD: &str = "/v1/poe/upload";
/// Issue colored tokens.
pub const ROUTE_TOKENS_ISSUE: &str = "/v1/transaction/tokens/issue";
/// Transfer colored tokens.
pub const ROUTE_TOKENS_TRANSFER: &str = "/v1/transaction/tokens/transfer";
/// Issue a digital asset.
pub const ROUTE_ASSETS_ISSUE: &str = "/v1/transaction/assets/issue";
/// Transfer digital assets.
pub const ROUTE_ASSETS_TRANSFER: &str = "/v1/transaction/assets/transfer";
/// Query transaction logs.
pub const ROUTE_TRANSACTION_LOGS: &str = "/v1/transaction/logs";
