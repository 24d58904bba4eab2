//! Issue-rate throttling.
//!
//! # Design Decisions
//! - Fixed-interval ticker rather than a refilling bucket: the ceiling holds
//!   over every window, not just on average
//! - Missed ticks are delayed, never bursted, so a slow pool cannot build up
//!   credit and exceed the rate afterwards

use std::time::Duration;

use tokio::time::{self, Interval, MissedTickBehavior};

/// Longest pause the scheduler takes between issues or bursts.
pub const MAX_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// Time `slots` attempts take at a rate, capped at `MAX_PERIOD`.
fn period_for(slots: f64, rate_per_second: f64) -> Duration {
    Duration::try_from_secs_f64(slots / rate_per_second)
        .map_or(MAX_PERIOD, |period| period.min(MAX_PERIOD))
}

/// Interval between issues for a rate.
pub fn issue_period(rate_per_second: f64) -> Duration {
    period_for(1.0, rate_per_second).max(Duration::from_nanos(1))
}

/// Minimum wall time for one burst of `batch` attempts at a rate.
pub fn batch_period(batch: usize, rate_per_second: f64) -> Duration {
    period_for(batch as f64, rate_per_second)
}

/// Paces attempt issue to at most one per period.
pub struct IssueThrottle {
    ticker: Interval,
}

impl IssueThrottle {
    pub fn per_second(rate_per_second: f64) -> Self {
        let mut ticker = time::interval(issue_period(rate_per_second));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { ticker }
    }

    /// Wait for the next issue slot. The first slot is immediate.
    pub async fn ready(&mut self) {
        self.ticker.tick().await;
    }
}
