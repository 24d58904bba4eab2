//! Result sink subsystem.
//!
//! # Data Flow
//! ```text
//! AttemptReport (from scan worker)
//!     → console.rs (one status line per attempt, stdout)
//!     → if funded:
//!         findings.rs (append block to the findings file)
//!         → Shutdown::trigger(FundsFound)
//! ```
//!
//! # Design Decisions
//! - The status line is written before the finding is persisted
//! - A failed append is logged but still stops the scan
//! - Console and file writes are each serialized by a mutex

pub mod console;
pub mod findings;
pub mod result_sink;

pub use findings::{Finding, FindingsStore};
pub use result_sink::ResultSink;
