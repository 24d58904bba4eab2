//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → ScannerConfig (validated, immutable)
//!     → handed by value to the ledger client, sink and scheduler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, read_config, ConfigError};
pub use schema::ScannerConfig;
pub use schema::{LedgerConfig, ObservabilityConfig, OutputConfig, ScanConfig, SchedulePolicy};
pub use validation::{validate_config, ValidationError};
