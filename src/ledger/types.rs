//! Ledger wire types, balances and error definitions.

use serde::Deserialize;
use thiserror::Error;

// Re-export LedgerConfig from config module to avoid duplication
pub use crate::config::schema::LedgerConfig;

/// SUN per TRX.
pub const SUN_PER_TRX: u64 = 1_000_000;

/// Display unit label.
pub const UNIT_LABEL: &str = "TRX";

/// An account balance held in SUN, the ledger's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Balance(u64);

impl Balance {
    pub fn from_sun(sun: u64) -> Self {
        Self(sun)
    }

    pub fn sun(&self) -> u64 {
        self.0
    }

    /// Balance in TRX.
    pub fn as_trx(&self) -> f64 {
        self.0 as f64 / SUN_PER_TRX as f64
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

/// Renders the TRX value exactly, trailing zeros trimmed (`5.0`, `1.5`, `0.000001`).
impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / SUN_PER_TRX;
        let frac = self.0 % SUN_PER_TRX;
        let digits = format!("{:06}", frac);
        let trimmed = digits.trim_end_matches('0');
        if trimmed.is_empty() {
            write!(f, "{}.0", whole)
        } else {
            write!(f, "{}.{}", whole, trimmed)
        }
    }
}

/// Normalized result of one balance lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceOutcome {
    /// Account exists; balance as reported.
    Amount(Balance),
    /// Account has never received funds.
    Zero,
    /// Address failed the local shape check; no request was made.
    InvalidAddress,
    /// Transport, status or decoding failure for this attempt only.
    TransientError(String),
}

impl BalanceOutcome {
    /// True when the address holds a nonzero balance.
    pub fn is_funded(&self) -> bool {
        matches!(self, BalanceOutcome::Amount(balance) if balance.is_positive())
    }

    /// Metric label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            BalanceOutcome::Amount(b) if b.is_positive() => "funded",
            BalanceOutcome::Amount(_) | BalanceOutcome::Zero => "empty",
            BalanceOutcome::InvalidAddress => "invalid_address",
            BalanceOutcome::TransientError(_) => "transient_error",
        }
    }
}

/// `GET /v1/accounts/{address}` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsResponse {
    #[serde(default)]
    pub data: Vec<AccountData>,
}

/// One account entry; only the fields the scanner reads.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountData {
    /// Balance in SUN; absent for accounts holding none.
    #[serde(default)]
    pub balance: u64,
}

impl AccountsResponse {
    /// Balance of the first account entry, or `None` if the account is unknown.
    pub fn balance(&self) -> Option<Balance> {
        self.data.first().map(|account| Balance::from_sun(account.balance))
    }
}

/// Errors that can occur during ledger lookups.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Address failed the local shape check.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Connection or request failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// Request timed out.
    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    /// API answered with a non-success status.
    #[error("API returned status {0}")]
    Status(u16),

    /// Response body was not the expected JSON.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
