//! TRON Address Scanner
//!
//! Generates random secp256k1 keys, derives their TRON addresses, asks the
//! TronGrid API for each balance, and stops at the first funded address.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────── SCHEDULER ────────────────────────────┐
//!   │  ticker (rate_per_second) + semaphore (workers)                   │
//!   │                                                                   │
//!   │   ┌──────────┐   ┌──────────────┐   ┌──────────────┐   ┌───────┐  │
//!   │   │   keys   │──▶│   address    │──▶│    ledger    │──▶│ sink  │  │
//!   │   │ (OsRng)  │   │ (secp256k1,  │   │ GET /v1/     │   │stdout,│  │
//!   │   └──────────┘   │ base58check) │   │ accounts/{a} │   │found. │  │
//!   │                  └──────────────┘   └──────────────┘   │  txt  │  │
//!   │                                                        └───┬───┘  │
//!   └────────────────────────────────────────────────────────────┼──────┘
//!                     ▲                                           │
//!                     │         Shutdown (watch channel)          │
//!        SIGINT/SIGTERM ─────────────────┴──────── first finding ◀┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use tron_scanner::config::{load_config, ConfigError, ScannerConfig, SchedulePolicy};
use tron_scanner::keys::OsKeySource;
use tron_scanner::ledger::LedgerClient;
use tron_scanner::lifecycle::signals::listen_for_interrupt;
use tron_scanner::lifecycle::Shutdown;
use tron_scanner::observability::{logging, metrics};
use tron_scanner::scan::{AttemptCounter, ScanWorker, Scheduler};
use tron_scanner::sink::{FindingsStore, ResultSink};

#[derive(Parser)]
#[command(name = "tron-scanner")]
#[command(about = "Scan random TRON addresses for nonzero balances", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum attempts in flight
    #[arg(short, long)]
    workers: Option<usize>,

    /// Ceiling on attempts issued per second
    #[arg(short, long)]
    rate: Option<f64>,

    /// Pacing policy: steady or burst
    #[arg(long)]
    policy: Option<SchedulePolicy>,

    /// Stop after this many attempts (0 = unlimited)
    #[arg(long)]
    max_attempts: Option<u64>,

    /// Ledger API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Ledger API key
    #[arg(long, env = "TRONGRID_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Findings file
    #[arg(long)]
    findings: Option<String>,

    /// Disable colored status lines
    #[arg(long)]
    no_color: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut ScannerConfig) {
        if let Some(workers) = self.workers {
            config.scan.workers = workers;
        }
        if let Some(rate) = self.rate {
            config.scan.rate_per_second = rate;
        }
        if let Some(policy) = self.policy {
            config.scan.policy = policy;
        }
        if let Some(max_attempts) = self.max_attempts {
            config.scan.max_attempts = max_attempts;
        }
        if let Some(base_url) = self.base_url {
            config.ledger.base_url = base_url;
        }
        if let Some(api_key) = self.api_key {
            config.ledger.api_key = Some(api_key);
        }
        if let Some(findings) = self.findings {
            config.output.findings_path = findings;
        }
        if self.no_color {
            config.output.color = false;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    let path = cli.config.take();

    let config = match load_config(path.as_deref(), |config| cli.apply(config)) {
        Ok(config) => config,
        Err(ConfigError::Validation(errors)) => {
            for error in errors {
                eprintln!("Invalid configuration: {}", error);
            }
            return ExitCode::FAILURE;
        }
        Err(e) => {
            let source = path.as_deref().map(|p| p.display().to_string()).unwrap_or_default();
            eprintln!("Failed to load {}: {}", source, e);
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!("tron-scanner v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        base_url = %config.ledger.base_url,
        workers = config.scan.workers,
        rate_per_second = config.scan.rate_per_second,
        findings = %config.output.findings_path,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let ledger = match LedgerClient::new(config.ledger.clone()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create ledger client");
            return ExitCode::FAILURE;
        }
    };

    let shutdown = Shutdown::new();
    tokio::spawn(listen_for_interrupt(shutdown.clone()));

    let sink = Arc::new(ResultSink::new(
        FindingsStore::new(&config.output.findings_path),
        shutdown.clone(),
        config.output.color,
    ));
    let worker = ScanWorker::new(OsKeySource, ledger, Arc::new(AttemptCounter::new()), sink);
    let summary = Scheduler::new(worker, config.scan, shutdown).run().await;

    println!("\nScan ended ({}) after {} attempts", summary.stop_reason, summary.completed);
    ExitCode::SUCCESS
}
