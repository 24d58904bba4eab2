//! Balance probe seam between the scan worker and the ledger.

use std::future::Future;

use crate::ledger::types::BalanceOutcome;

/// Looks up the balance of one address.
///
/// Implementations never retry and never fail: every problem is folded into
/// a [`BalanceOutcome`] so the caller can report it and move on.
pub trait BalanceProbe: Send + Sync + 'static {
    fn probe(&self, address: &str) -> impl Future<Output = BalanceOutcome> + Send;
}
