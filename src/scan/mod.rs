//! Scan subsystem.
//!
//! # Data Flow
//! ```text
//! scheduler.rs (RUNNING)
//!     → throttle.rs (ticker / batch pacing at rate_per_second)
//!     → semaphore permit (at most `workers` in flight)
//!     → worker.rs: KeySource → derive_address → BalanceProbe
//!         → counter.rs (sequence number)
//!         → report.rs (AttemptReport) → ResultSink
//!
//! Shutdown fires (interrupt, finding, limit)
//!     → scheduler stops issuing → drains in-flight → STOPPED
//! ```
//!
//! # Design Decisions
//! - The only shared state is the counter and the shutdown signal
//! - Attempt failures are attempt-local; only shutdown ends the scan

pub mod counter;
pub mod report;
pub mod scheduler;
pub mod throttle;
pub mod worker;

pub use counter::AttemptCounter;
pub use report::{AttemptError, AttemptOutcome, AttemptReport};
pub use scheduler::{ScanState, ScanSummary, Scheduler};
pub use worker::ScanWorker;
