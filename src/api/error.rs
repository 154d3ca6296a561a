//! Error types for the wallet service client.

use thiserror::Error;

use crate::signing::SigningError;

/// Result type alias for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Error type covering every way a wallet operation can fail.
///
/// All operations surface errors to the caller rather than retrying
/// internally; issue and transfer calls are not safely auto-retryable
/// without idempotency keys, so retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Malformed or missing required fields, rejected before any network I/O
    /// or by the service with a 400
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unknown identifier
    #[error("not found: {0}")]
    NotFound(String),

    /// Transfer exceeds the source wallet's unspent balance (detected by the
    /// ledger; the client has no authoritative balance view)
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    /// Signature or credential rejected
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Synchronous confirmation wait exceeded. The mutation's outcome is
    /// unknown: it may have been accepted even though the confirmation wait
    /// timed out. Poll the query APIs rather than blindly retrying.
    #[error("timed out waiting for the wallet service; outcome unknown, poll the query APIs")]
    Timeout,

    /// Non-success service response outside the mapped taxonomy
    #[error("service error {code}: {message}")]
    Service {
        /// Service or HTTP status code
        code: i32,
        /// Service-supplied message
        message: String,
    },

    /// Network-level failure from the HTTP client
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    /// Response body could not be decoded as the expected type
    #[error("deserialize error: {0}")]
    Deserialize(String),

    /// Embedded signing failed before the request was sent
    #[error("signing error: {0}")]
    Signing(#[from] SigningError),
}

impl WalletError {
    /// Map a service or HTTP status code to a typed error.
    ///
    /// This is the single place the code taxonomy lives: both HTTP statuses
    /// and response-envelope codes go through it.
    pub(crate) fn from_code(code: i32, message: String) -> Self {
        match code {
            400 => Self::InvalidInput(message),
            401 | 403 => Self::Unauthorized(message),
            402 => Self::InsufficientFunds(message),
            404 => Self::NotFound(message),
            408 => Self::Timeout,
            _ => Self::Service { code, message },
        }
    }

    /// The status code this error corresponds to, where one exists.
    pub fn status_code(&self) -> Option<i32> {
        match self {
            Self::InvalidInput(_) => Some(400),
            Self::Unauthorized(_) => Some(401),
            Self::InsufficientFunds(_) => Some(402),
            Self::NotFound(_) => Some(404),
            Self::Timeout => Some(408),
            Self::Service { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WalletError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(e)
        }
    }
}

/// Error body shape returned by the service on non-2xx responses.
///
/// Matches the response envelope's `code`/`message` fields; bodies that do
/// not parse fall back to the raw text.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ErrorEnvelope {
    /// Service status code, when present
    #[serde(default)]
    pub code: Option<i32>,
    /// Human-readable error message
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

impl ErrorEnvelope {
    /// Wrap raw body text that did not parse as an envelope.
    pub fn from_text(text: String) -> Self {
        Self {
            code: None,
            message: Some(text),
        }
    }

    /// The error message, or a placeholder when the body carried none.
    pub fn get_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "unknown error".to_string())
    }
}
