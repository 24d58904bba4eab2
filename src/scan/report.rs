//! Attempt reports handed from the scan worker to the result sink.

use thiserror::Error;

use crate::keys::{Address, AddressError, KeyError, PrivateKey};
use crate::ledger::BalanceOutcome;

/// Why an attempt was discarded before its balance was probed.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error("key generation failed: {0}")]
    Key(#[from] KeyError),

    #[error("address derivation failed: {0}")]
    Derivation(#[from] AddressError),
}

/// Terminal state of one attempt.
#[derive(Debug)]
pub enum AttemptOutcome {
    /// Key derived to an address and the ledger was asked about it.
    Probed {
        private_key: PrivateKey,
        address: Address,
        balance: BalanceOutcome,
    },
    /// Key generation or derivation failed; nothing was probed.
    Aborted(AttemptError),
}

/// One completed attempt, numbered in completion order.
#[derive(Debug)]
pub struct AttemptReport {
    pub sequence: u64,
    pub outcome: AttemptOutcome,
}

impl AttemptReport {
    /// True when the probed address holds a nonzero balance.
    pub fn is_funded(&self) -> bool {
        matches!(&self.outcome, AttemptOutcome::Probed { balance, .. } if balance.is_funded())
    }

    /// Metric label for this attempt.
    pub fn label(&self) -> &'static str {
        match &self.outcome {
            AttemptOutcome::Probed { balance, .. } => balance.label(),
            AttemptOutcome::Aborted(_) => "aborted",
        }
    }
}
