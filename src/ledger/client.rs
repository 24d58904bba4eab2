//! TronGrid HTTP client with timeout and error handling.
//!
//! # Responsibilities
//! - Query account info for an address
//! - Handle timeouts and network errors gracefully
//! - Normalize every response into a `BalanceOutcome`

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use tokio::time::timeout;

use crate::keys::address::is_valid_shape;
use crate::ledger::probe::BalanceProbe;
use crate::ledger::types::{
    AccountsResponse, Balance, BalanceOutcome, LedgerConfig, LedgerError, LedgerResult,
};
use crate::observability::metrics;

/// Ledger API client.
#[derive(Clone)]
pub struct LedgerClient {
    http: reqwest::Client,
    /// Base URL without trailing slash.
    base_url: String,
    config: LedgerConfig,
    timeout_duration: Duration,
}

impl LedgerClient {
    /// Create a new ledger client.
    ///
    /// No request is made here; an unreachable API surfaces later as
    /// transient probe errors.
    pub fn new(config: LedgerConfig) -> LedgerResult<Self> {
        let timeout_duration = Duration::from_secs(config.timeout_secs);

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| LedgerError::Client(format!("Invalid User-Agent: {}", e)))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(key) = &config.api_key {
            let name = HeaderName::from_bytes(config.api_key_header.as_bytes()).map_err(|e| {
                LedgerError::Client(format!(
                    "Invalid API key header '{}': {}",
                    config.api_key_header, e
                ))
            })?;
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| LedgerError::Client(format!("Invalid API key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(timeout_duration);
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|e| LedgerError::Client(e.to_string()))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        tracing::info!(
            base_url = %base_url,
            timeout_secs = config.timeout_secs,
            api_key = config.api_key.is_some(),
            "Ledger client initialized"
        );

        Ok(Self {
            http,
            base_url,
            config,
            timeout_duration,
        })
    }

    /// Account-info URL for an address.
    pub fn account_url(&self, address: &str) -> String {
        format!("{}/v1/accounts/{}", self.base_url, address)
    }

    /// Fetch the balance of an address.
    ///
    /// Returns `Ok(None)` when the ledger has no record of the account.
    pub async fn account_balance(&self, address: &str) -> LedgerResult<Option<Balance>> {
        if !is_valid_shape(address) {
            return Err(LedgerError::InvalidAddress(address.to_string()));
        }

        let url = self.account_url(address);
        let request = async {
            let response = self
                .http
                .get(&url)
                .send()
                .await
                .map_err(|e| LedgerError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(LedgerError::Status(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| LedgerError::Transport(e.to_string()))?;
            serde_json::from_slice::<AccountsResponse>(&body)
                .map_err(|e| LedgerError::Decode(e.to_string()))
        };

        let account = timeout(self.timeout_duration, request)
            .await
            .map_err(|_| LedgerError::Timeout(self.config.timeout_secs))??;

        Ok(account.balance())
    }
}

impl BalanceProbe for LedgerClient {
    async fn probe(&self, address: &str) -> BalanceOutcome {
        let started = Instant::now();
        let result = self.account_balance(address).await;
        metrics::record_probe_duration(started.elapsed());

        match result {
            Ok(Some(balance)) => BalanceOutcome::Amount(balance),
            Ok(None) => BalanceOutcome::Zero,
            Err(LedgerError::InvalidAddress(_)) => {
                tracing::warn!(address = %address, "Invalid address generated, skipping lookup");
                BalanceOutcome::InvalidAddress
            }
            Err(e) => {
                tracing::warn!(address = %address, error = %e, "Balance lookup failed");
                BalanceOutcome::TransientError(e.to_string())
            }
        }
    }
}

impl std::fmt::Debug for LedgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerClient")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.config.timeout_secs)
            .field("api_key", &self.config.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
