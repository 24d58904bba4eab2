//! Terminal handling of attempt reports.

use std::io::Write;
use std::sync::Mutex;

use crate::lifecycle::{Shutdown, StopReason};
use crate::observability::metrics;
use crate::scan::report::{AttemptOutcome, AttemptReport};
use crate::sink::console::{funds_found_line, status_line};
use crate::sink::findings::{Finding, FindingsStore};
use crate::ledger::BalanceOutcome;

/// Writes every report to the console and records funded addresses.
pub struct ResultSink {
    console: Mutex<Box<dyn Write + Send>>,
    findings: FindingsStore,
    shutdown: Shutdown,
    color: bool,
}

impl ResultSink {
    /// Sink writing status lines to stdout.
    pub fn new(findings: FindingsStore, shutdown: Shutdown, color: bool) -> Self {
        Self::with_writer(Box::new(std::io::stdout()), findings, shutdown, color)
    }

    /// Sink writing status lines to an arbitrary writer.
    pub fn with_writer(
        console: Box<dyn Write + Send>,
        findings: FindingsStore,
        shutdown: Shutdown,
        color: bool,
    ) -> Self {
        Self {
            console: Mutex::new(console),
            findings,
            shutdown,
            color,
        }
    }

    pub fn findings(&self) -> &FindingsStore {
        &self.findings
    }

    /// Print the status line and, for a funded address, record it and stop the scan.
    pub async fn report(&self, report: &AttemptReport) {
        if let AttemptOutcome::Aborted(error) = &report.outcome {
            tracing::error!(sequence = report.sequence, error = %error, "Attempt aborted");
        }

        let mut text = status_line(report, self.color);
        text.push('\n');

        let funded = match &report.outcome {
            AttemptOutcome::Probed {
                private_key,
                address,
                balance: BalanceOutcome::Amount(balance),
            } if balance.is_positive() => {
                Some(Finding::new(private_key.clone(), address.clone(), *balance))
            }
            _ => None,
        };

        if funded.is_some() {
            text.push('\n');
            text.push_str(&funds_found_line(self.color));
            text.push('\n');
        }
        self.write_console(&text);

        if let Some(finding) = funded {
            self.record(&finding).await;
        }
    }

    fn write_console(&self, text: &str) {
        let mut console = self.console.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = console.write_all(text.as_bytes()).and_then(|_| console.flush()) {
            tracing::warn!(error = %e, "Failed to write status line");
        }
    }

    async fn record(&self, finding: &Finding) {
        metrics::record_finding();

        match self.findings.append(finding).await {
            Ok(()) => tracing::info!(
                address = %finding.address,
                balance = %finding.balance,
                path = %self.findings.path().display(),
                "Funded address recorded"
            ),
            // The status line above still carries the key.
            Err(e) => tracing::error!(
                address = %finding.address,
                path = %self.findings.path().display(),
                error = %e,
                "Failed to append finding"
            ),
        }

        if self.shutdown.trigger(StopReason::FundsFound) {
            tracing::info!("Stopping scan after first finding");
        }
    }
}

impl std::fmt::Debug for ResultSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultSink")
            .field("findings", &self.findings.path())
            .field("color", &self.color)
            .finish()
    }
}
