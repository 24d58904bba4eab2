//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGINT (Ctrl-C) and, on Unix, SIGTERM
//! - Translate either into `StopReason::Interrupted`
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - The listener exits quietly if the scan stops for another reason first

use crate::lifecycle::shutdown::{Shutdown, StopReason};

/// Listen for termination signals until the scan stops.
pub async fn listen_for_interrupt(shutdown: Shutdown) {
    tokio::select! {
        _ = terminate_signal() => {
            if shutdown.trigger(StopReason::Interrupted) {
                tracing::info!("Interrupt received, stopping scan");
            }
        }
        _ = shutdown.triggered() => {}
    }
}

#[cfg(unix)]
async fn terminate_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = sigterm.recv() => {}
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to register SIGTERM handler, using Ctrl-C only");
            ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate_signal() {
    ctrl_c().await;
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_listener_exits_when_scan_stops() {
        let shutdown = Shutdown::new();
        let listener = tokio::spawn(listen_for_interrupt(shutdown.clone()));

        shutdown.trigger(StopReason::FundsFound);

        tokio::time::timeout(Duration::from_secs(1), listener)
            .await
            .expect("listener should exit")
            .unwrap();
        assert_eq!(shutdown.reason(), Some(StopReason::FundsFound));
    }
}
