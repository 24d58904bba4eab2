//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger(Interrupted)
//!
//! Shutdown (shutdown.rs):
//!     trigger(reason) → watch channel → scheduler stops issuing
//!                                     → in-flight attempts drain
//!                                     → process exits with the reason
//! ```
//!
//! # Design Decisions
//! - One stop signal for every terminal condition (interrupt, finding, limit)
//! - The first reason recorded is the one reported at exit
//! - Draining is bounded by the ledger request deadline

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, StopReason};
