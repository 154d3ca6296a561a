//! Fee denominations and issue/transfer request bodies.

use serde::{Deserialize, Serialize};

use crate::shared::Identifier;

/// Fee amount in atomic ledger units.
///
/// The denomination ladder is fixed: 1 ATOM is the atomic unit,
/// 1 MicroAXT = 1,000 ATOM, 1 AXT = 1,000 MicroAXT. All arithmetic is
/// checked integer arithmetic; there is no floating point anywhere in
/// fee handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxtAmount(i64);

impl AxtAmount {
    /// Atoms per MicroAXT.
    pub const ATOMS_PER_MICRO_AXT: i64 = 1_000;
    /// Atoms per AXT.
    pub const ATOMS_PER_AXT: i64 = 1_000_000;

    /// Amount in atomic units.
    pub const fn from_atom(atoms: i64) -> Self {
        Self(atoms)
    }

    /// Amount in MicroAXT; `None` on overflow.
    pub fn from_micro_axt(micro: i64) -> Option<Self> {
        micro.checked_mul(Self::ATOMS_PER_MICRO_AXT).map(Self)
    }

    /// Amount in AXT; `None` on overflow.
    pub fn from_axt(axt: i64) -> Option<Self> {
        axt.checked_mul(Self::ATOMS_PER_AXT).map(Self)
    }

    /// The raw atomic-unit value.
    pub const fn atoms(self) -> i64 {
        self.0
    }

    /// Checked addition in atomic units.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl std::fmt::Display for AxtAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ATOM", self.0)
    }
}

/// Transaction fee attached to issue/transfer requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// Fee amount in atomic units
    pub amount: AxtAmount,
}

impl Fee {
    /// Create a fee with the given amount.
    pub const fn new(amount: AxtAmount) -> Self {
        Self { amount }
    }
}

/// One colored-token amount within a transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenAmount {
    /// Colored token id
    pub token_id: String,
    /// Amount to move
    pub amount: i64,
}

impl TokenAmount {
    /// Create a token amount entry.
    pub fn new(token_id: impl Into<String>, amount: i64) -> Self {
        Self {
            token_id: token_id.into(),
            amount,
        }
    }
}

/// Request body for issuing colored tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCTokenBody {
    /// Issuing wallet identifier
    pub issuer: Identifier,
    /// Wallet receiving the minted supply
    pub owner: Identifier,
    /// Asset the tokens are colored against
    pub asset_id: String,
    /// Amount to mint
    pub amount: i64,
    /// Fee deducted from the issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Request body for issuing a digital asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueAssetBody {
    /// Issuing wallet identifier
    pub issuer: Identifier,
    /// Wallet receiving the asset
    pub owner: Identifier,
    /// Asset identifier
    pub asset_id: String,
    /// Fee deducted from the issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Request body for transferring colored tokens.
///
/// Fails server-side with InsufficientFunds when the source wallet lacks
/// unspent balance; the client has no authoritative balance view and does
/// not pre-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferCTokenBody {
    /// Source wallet identifier
    pub from: Identifier,
    /// Destination wallet identifier
    pub to: Identifier,
    /// Asset the tokens are colored against
    #[serde(default)]
    pub asset_id: String,
    /// Token amounts to move
    pub tokens: Vec<TokenAmount>,
    /// Fee deducted from the sender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}

/// Request body for transferring digital assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferAssetBody {
    /// Source wallet identifier
    pub from: Identifier,
    /// Destination wallet identifier
    pub to: Identifier,
    /// Asset identifiers to move
    pub assets: Vec<String>,
    /// Fee deducted from the sender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}
