//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the scanner.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the scanner.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ScannerConfig {
    /// Worker pool and issue-rate settings.
    pub scan: ScanConfig,

    /// Ledger balance API settings.
    pub ledger: LedgerConfig,

    /// Console and findings-file settings.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// How the scheduler paces attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchedulePolicy {
    /// One attempt per ticker interval, bounded by the worker pool.
    #[default]
    Steady,
    /// A full batch of `workers` attempts, then a pause sized to the rate.
    ///
    /// The ceiling holds only over `workers / rate_per_second` windows: with
    /// more workers than the per-second rate, a whole batch lands at once.
    Burst,
}

impl std::str::FromStr for SchedulePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "steady" => Ok(SchedulePolicy::Steady),
            "burst" => Ok(SchedulePolicy::Burst),
            other => Err(format!("unknown schedule policy '{}'", other)),
        }
    }
}

/// Scan scheduling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum attempts in flight at once.
    pub workers: usize,

    /// Ceiling on attempts issued per second.
    pub rate_per_second: f64,

    /// Pacing policy.
    pub policy: SchedulePolicy,

    /// Stop after issuing this many attempts (0 = run until stopped).
    pub max_attempts: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            rate_per_second: 4.0,
            policy: SchedulePolicy::Steady,
            max_attempts: 0,
        }
    }
}

impl ScanConfig {
    /// The attempt limit, if one is configured.
    pub fn attempt_limit(&self) -> Option<u64> {
        (self.max_attempts > 0).then_some(self.max_attempts)
    }

    /// True when a burst issues more attempts at once than one second's rate.
    pub fn burst_exceeds_rate(&self) -> bool {
        self.policy == SchedulePolicy::Burst && self.workers as f64 > self.rate_per_second
    }
}

/// Ledger balance API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// API base URL (e.g., "https://api.trongrid.io").
    pub base_url: String,

    /// Optional API key sent with every request.
    pub api_key: Option<String>,

    /// Header name carrying the API key.
    pub api_key_header: String,

    /// User-Agent header value.
    pub user_agent: String,

    /// Per-request deadline in seconds.
    pub timeout_secs: u64,

    /// Honor HTTP(S)_PROXY environment variables.
    pub system_proxy: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.trongrid.io".to_string(),
            api_key: None,
            api_key_header: "TRON-PRO-API-KEY".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 10,
            system_proxy: true,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Append-only findings file.
    pub findings_path: String,

    /// Colorize console status lines.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            findings_path: "found.txt".to_string(),
            color: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
