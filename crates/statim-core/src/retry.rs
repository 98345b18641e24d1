//! Bounded retry with exponential backoff for snapshot fetches.
//!
//! The default policy makes a single attempt.

use std::time::Duration;

use crate::error::FetchError;
use crate::snapshot::DashboardSnapshot;
use crate::source::SnapshotSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first. Never below 1.
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

impl RetryPolicy {
    /// One attempt, no waiting.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
        }
    }

    pub fn new(max_attempts: u32, initial_backoff: Duration, max_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
            max_backoff: max_backoff.max(initial_backoff),
        }
    }

    /// Delay after the given failed attempt (1-based), doubling each time up
    /// to `max_backoff`.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(31);
        self.initial_backoff
            .saturating_mul(1u32 << shift)
            .min(self.max_backoff)
    }
}

/// Fetch from `source`, retrying transient failures per `policy`.
///
/// `sleep` is called between attempts; pass `std::thread::sleep` outside tests.
pub fn fetch_with_retry<S, F>(
    source: &S,
    policy: &RetryPolicy,
    mut sleep: F,
) -> Result<DashboardSnapshot, FetchError>
where
    S: SnapshotSource + ?Sized,
    F: FnMut(Duration),
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match source.fetch() {
            Ok(snapshot) => return Ok(snapshot),
            Err(error) if attempt < max_attempts && error.is_transient() => {
                let delay = policy.backoff_for(attempt);
                tracing::warn!(
                    %error,
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "snapshot fetch failed, retrying"
                );
                sleep(delay);
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
