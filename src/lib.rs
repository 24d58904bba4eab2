//! TRON Address Scanner Library

pub mod config;
pub mod keys;
pub mod ledger;
pub mod lifecycle;
pub mod observability;
pub mod scan;
pub mod sink;

pub use config::schema::ScannerConfig;
pub use lifecycle::{Shutdown, StopReason};
pub use scan::{ScanSummary, Scheduler};
