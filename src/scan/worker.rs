//! One generate → derive → probe → report cycle.

use std::sync::Arc;

use crate::keys::{derive_address, is_valid_shape, AddressError, KeySource};
use crate::ledger::BalanceProbe;
use crate::observability::metrics;
use crate::scan::counter::AttemptCounter;
use crate::scan::report::{AttemptError, AttemptOutcome, AttemptReport};
use crate::sink::ResultSink;

/// Runs single scan attempts; shared by every task the scheduler spawns.
pub struct ScanWorker<K, P> {
    keys: K,
    probe: P,
    counter: Arc<AttemptCounter>,
    sink: Arc<ResultSink>,
}

impl<K: KeySource, P: BalanceProbe> ScanWorker<K, P> {
    pub fn new(keys: K, probe: P, counter: Arc<AttemptCounter>, sink: Arc<ResultSink>) -> Self {
        Self {
            keys,
            probe,
            counter,
            sink,
        }
    }

    /// Run one attempt, count it, and hand the report to the sink.
    pub async fn run_attempt(&self) -> AttemptReport {
        let outcome = self.attempt().await;

        let report = AttemptReport {
            sequence: self.counter.increment_and_get(),
            outcome,
        };
        metrics::record_attempt(report.label());

        self.sink.report(&report).await;
        report
    }

    async fn attempt(&self) -> AttemptOutcome {
        let private_key = match self.keys.generate() {
            Ok(key) => key,
            Err(e) => return AttemptOutcome::Aborted(AttemptError::Key(e)),
        };

        let address = match derive_address(&private_key) {
            Ok(address) => address,
            Err(e) => return AttemptOutcome::Aborted(AttemptError::Derivation(e)),
        };

        if !is_valid_shape(address.as_str()) {
            return AttemptOutcome::Aborted(AttemptError::Derivation(AddressError::Shape(
                address.to_string(),
            )));
        }

        let balance = self.probe.probe(address.as_str()).await;

        AttemptOutcome::Probed {
            private_key,
            address,
            balance,
        }
    }

    pub fn counter(&self) -> &AttemptCounter {
        &self.counter
    }

    pub fn sink(&self) -> &ResultSink {
        &self.sink
    }
}
