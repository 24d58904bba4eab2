//! Rate-bounded attempt scheduling.
//!
//! # Responsibilities
//! - Keep at most `workers` attempts in flight
//! - Never issue faster than `rate_per_second`
//! - Stop issuing as soon as the shutdown signal fires, then drain
//!
//! # Design Decisions
//! - In-flight work is a `JoinSet` bounded by a semaphore, so spawned
//!   futures never pile up behind a slow ledger
//! - Each spawned attempt re-checks the stop signal before it starts
//! - The attempt limit stops issuing first and is recorded after draining,
//!   so every issued attempt completes

use std::sync::Arc;

use tokio::sync::{watch, OwnedSemaphorePermit, Semaphore};
use tokio::task::{JoinError, JoinSet};
use tokio::time::{self, Instant};

use crate::config::{ScanConfig, SchedulePolicy};
use crate::keys::KeySource;
use crate::ledger::BalanceProbe;
use crate::lifecycle::shutdown::wait_for_stop;
use crate::lifecycle::{Shutdown, StopReason};
use crate::observability::metrics;
use crate::scan::report::AttemptReport;
use crate::scan::throttle::{batch_period, IssueThrottle};
use crate::scan::worker::ScanWorker;

/// Scheduler lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Running,
    Stopped,
}

/// What a finished scan did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// Attempts issued by the scheduler.
    pub issued: u64,
    /// Attempts that ran to completion.
    pub completed: u64,
    pub stop_reason: StopReason,
}

type AttemptTasks = JoinSet<Option<AttemptReport>>;

/// Issues scan attempts until stopped.
pub struct Scheduler<K, P> {
    worker: Arc<ScanWorker<K, P>>,
    config: ScanConfig,
    shutdown: Shutdown,
    state: watch::Sender<ScanState>,
}

impl<K: KeySource, P: BalanceProbe> Scheduler<K, P> {
    pub fn new(worker: ScanWorker<K, P>, config: ScanConfig, shutdown: Shutdown) -> Self {
        let (state, _) = watch::channel(ScanState::Running);
        Self {
            worker: Arc::new(worker),
            config,
            shutdown,
            state,
        }
    }

    /// Observe the scheduler state.
    pub fn state(&self) -> watch::Receiver<ScanState> {
        self.state.subscribe()
    }

    /// Run until the shutdown signal fires or the attempt limit is reached.
    pub async fn run(self) -> ScanSummary {
        tracing::info!(
            workers = self.config.workers,
            rate_per_second = self.config.rate_per_second,
            policy = ?self.config.policy,
            max_attempts = self.config.max_attempts,
            "Scan starting"
        );
        if self.config.burst_exceeds_rate() {
            tracing::warn!(
                workers = self.config.workers,
                rate_per_second = self.config.rate_per_second,
                "Burst batches exceed the per-second rate; the ceiling holds per batch period"
            );
        }

        let issued = match self.config.policy {
            SchedulePolicy::Steady => self.run_steady().await,
            SchedulePolicy::Burst => self.run_burst().await,
        };

        if self.limit_reached(issued) {
            self.shutdown.trigger(StopReason::AttemptLimit);
        }
        self.state.send_replace(ScanState::Stopped);
        metrics::record_in_flight(0);

        let summary = ScanSummary {
            issued,
            completed: self.worker.counter().get(),
            stop_reason: self.shutdown.reason().unwrap_or(StopReason::Interrupted),
        };

        tracing::info!(
            issued = summary.issued,
            completed = summary.completed,
            reason = %summary.stop_reason,
            "Scan stopped"
        );
        summary
    }

    /// One attempt per tick, gated by a pool permit.
    async fn run_steady(&self) -> u64 {
        let permits = Arc::new(Semaphore::new(self.config.workers));
        let mut throttle = IssueThrottle::per_second(self.config.rate_per_second);
        let mut stop = self.shutdown.subscribe();
        let mut tasks = AttemptTasks::new();
        let mut issued = 0u64;

        loop {
            if self.limit_reached(issued) {
                break;
            }

            // Permit first: the issue then happens exactly on a tick.
            let permit = tokio::select! {
                biased;
                _ = wait_for_stop(&mut stop) => break,
                permit = permits.clone().acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => break,
                },
            };

            tokio::select! {
                biased;
                _ = wait_for_stop(&mut stop) => break,
                _ = throttle.ready() => {}
            }

            self.spawn_attempt(&mut tasks, Some(permit));
            issued += 1;
            metrics::record_in_flight(self.config.workers - permits.available_permits());

            while let Some(result) = tasks.try_join_next() {
                self.handle_join(result);
            }
        }

        self.drain(&mut tasks).await;
        issued
    }

    /// A batch of `workers` attempts, then a pause so the batch respects the rate.
    async fn run_burst(&self) -> u64 {
        let period = batch_period(self.config.workers, self.config.rate_per_second);
        let mut stop = self.shutdown.subscribe();
        let mut issued = 0u64;

        loop {
            if self.shutdown.is_triggered() || self.limit_reached(issued) {
                break;
            }

            let started = Instant::now();
            let batch = match self.config.attempt_limit() {
                Some(limit) => (limit - issued).min(self.config.workers as u64),
                None => self.config.workers as u64,
            };

            let mut tasks = AttemptTasks::new();
            for _ in 0..batch {
                self.spawn_attempt(&mut tasks, None);
            }
            issued += batch;
            metrics::record_in_flight(batch as usize);

            self.drain(&mut tasks).await;
            if self.limit_reached(issued) {
                break;
            }

            tokio::select! {
                biased;
                _ = wait_for_stop(&mut stop) => break,
                _ = time::sleep(period.saturating_sub(started.elapsed())) => {}
            }
        }

        issued
    }

    fn spawn_attempt(&self, tasks: &mut AttemptTasks, permit: Option<OwnedSemaphorePermit>) {
        let worker = self.worker.clone();
        let shutdown = self.shutdown.clone();

        tasks.spawn(async move {
            let _permit = permit;
            if shutdown.is_triggered() {
                return None;
            }
            Some(worker.run_attempt().await)
        });
    }

    async fn drain(&self, tasks: &mut AttemptTasks) {
        while let Some(result) = tasks.join_next().await {
            self.handle_join(result);
        }
    }

    fn handle_join(&self, result: Result<Option<AttemptReport>, JoinError>) {
        if let Err(e) = result {
            tracing::error!(error = %e, "Attempt task failed");
        }
    }

    fn limit_reached(&self, issued: u64) -> bool {
        matches!(self.config.attempt_limit(), Some(limit) if issued >= limit)
    }
}
