//! Ledger integration subsystem.
//!
//! # Data Flow
//! ```text
//! Address (from keys)
//!     → probe.rs (BalanceProbe seam used by the scan worker)
//!     → client.rs (shape check, GET /v1/accounts/{address} with deadline)
//!     → types.rs (AccountsResponse → Balance → BalanceOutcome)
//! ```
//!
//! # Design Decisions
//! - Invalid addresses never reach the network
//! - Every call has a deadline; no retries
//! - Failures are attempt-local and surface as `TransientError`

pub mod client;
pub mod probe;
pub mod types;

pub use client::LedgerClient;
pub use probe::BalanceProbe;
pub use types::{Balance, BalanceOutcome, LedgerError, SUN_PER_TRX, UNIT_LABEL};
