//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (workers >= 1, rate > 0, timeouts > 0)
//! - Reject rates whose issue or burst period exceeds `MAX_PERIOD`
//! - Check that URLs, header names and socket addresses parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ScannerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::header::HeaderName;
use thiserror::Error;

use crate::config::schema::{ScannerConfig, SchedulePolicy};
use crate::scan::throttle::MAX_PERIOD;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("scan.workers must be at least 1")]
    NoWorkers,

    #[error("scan.rate_per_second must be a positive number, got {0}")]
    InvalidRate(f64),

    #[error("scan.rate_per_second {0} is below the minimum of one attempt per day")]
    RateTooLow(f64),

    #[error("scan.workers / scan.rate_per_second must not exceed one day per burst")]
    BurstTooLong,

    #[error("ledger.base_url '{url}' is invalid: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("ledger.timeout_secs must be greater than 0")]
    ZeroTimeout,

    #[error("ledger.user_agent must not be empty")]
    EmptyUserAgent,

    #[error("ledger.api_key_header '{0}' is not a valid header name")]
    InvalidHeaderName(String),

    #[error("output.findings_path must not be empty")]
    EmptyFindingsPath,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Check a configuration for semantic errors.
pub fn validate_config(config: &ScannerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.scan.workers == 0 {
        errors.push(ValidationError::NoWorkers);
    }

    let rate = config.scan.rate_per_second;
    if !rate.is_finite() || rate <= 0.0 {
        errors.push(ValidationError::InvalidRate(rate));
    } else if exceeds_max_period(1.0, rate) {
        errors.push(ValidationError::RateTooLow(rate));
    } else if config.scan.policy == SchedulePolicy::Burst
        && exceeds_max_period(config.scan.workers as f64, rate)
    {
        errors.push(ValidationError::BurstTooLong);
    }

    match url::Url::parse(&config.ledger.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.ledger.base_url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.ledger.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.ledger.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.ledger.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }

    if HeaderName::from_bytes(config.ledger.api_key_header.as_bytes()).is_err() {
        errors.push(ValidationError::InvalidHeaderName(
            config.ledger.api_key_header.clone(),
        ));
    }

    if config.output.findings_path.trim().is_empty() {
        errors.push(ValidationError::EmptyFindingsPath);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// True when `slots` attempts at `rate` take longer than the scheduler will wait.
fn exceeds_max_period(slots: f64, rate: f64) -> bool {
    Duration::try_from_secs_f64(slots / rate).map_or(true, |period| period > MAX_PERIOD)
}
