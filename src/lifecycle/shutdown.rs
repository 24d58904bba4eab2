//! Shutdown coordination for the scanner.

use std::sync::Arc;

use tokio::sync::watch;

/// Why the scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Interrupt or terminate signal from the operator.
    Interrupted,
    /// A funded address was recorded.
    FundsFound,
    /// The configured attempt limit was reached.
    AttemptLimit,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Interrupted => f.write_str("stopped by user"),
            StopReason::FundsFound => f.write_str("funds found"),
            StopReason::AttemptLimit => f.write_str("attempt limit reached"),
        }
    }
}

/// Coordinator for stopping the scan.
///
/// Cloneable handle around a watch channel that every long-running task can
/// subscribe to. The first trigger wins; later triggers keep the original
/// reason.
#[derive(Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<Option<StopReason>>>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Subscribe to the stop signal.
    pub fn subscribe(&self) -> watch::Receiver<Option<StopReason>> {
        self.tx.subscribe()
    }

    /// Trigger the stop signal. Returns true if this call set the reason.
    pub fn trigger(&self, reason: StopReason) -> bool {
        self.tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(reason);
            true
        })
    }

    pub fn is_triggered(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// The reason recorded by the first trigger, if any.
    pub fn reason(&self) -> Option<StopReason> {
        *self.tx.borrow()
    }

    /// Wait until the stop signal fires, returning its reason.
    pub async fn triggered(&self) -> StopReason {
        wait_for_stop(&mut self.subscribe()).await
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait on a receiver until a stop reason is present.
pub async fn wait_for_stop(rx: &mut watch::Receiver<Option<StopReason>>) -> StopReason {
    match rx.wait_for(Option::is_some).await {
        Ok(reason) => (*reason).unwrap_or(StopReason::Interrupted),
        // Sender lives in every Shutdown clone; treat its loss as an interrupt.
        Err(_) => StopReason::Interrupted,
    }
}
