//!
//! Bounded readiness polling with a fixed delay between attempts.
//!
//! The poll loop is driven by [`workflow_core::task::sleep`], which is
//! backed by `setTimeout()` in WASM32 browser environments and by the
//! async runtime timer on native targets, making the loop uniform
//! across both.
//!

use crate::imports::*;
use workflow_core::task::sleep;

/// Resolution of a [`poll`] invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The readiness test passed within the attempt budget.
    Ready,
    /// The attempt budget lapsed before the readiness test passed.
    Exhausted,
}

impl PollOutcome {
    pub fn is_ready(&self) -> bool {
        self == &PollOutcome::Ready
    }
}

/// Attempt budget and fixed inter-attempt delay for [`poll`].
#[derive(Debug, Clone, Copy)]
pub struct PollOptions {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            attempts: 50,
            interval: Duration::from_millis(100),
        }
    }
}

impl PollOptions {
    pub fn new(attempts: u32, interval: Duration) -> Self {
        Self { attempts, interval }
    }

    /// Worst-case wall-clock time before the poll resolves.
    pub fn budget(&self) -> Duration {
        self.interval * self.attempts
    }
}

/// Repeatedly evaluates `test` until it passes or the attempt budget
/// is exhausted. Each attempt waits `options.interval` before testing,
/// so the first evaluation happens one interval after the call. The
/// delay is fixed, with no jitter. Exhaustion is not an error; it
/// resolves as [`PollOutcome::Exhausted`] and nothing else is signaled.
pub async fn poll<F>(options: PollOptions, mut test: F) -> PollOutcome
where
    F: FnMut() -> bool,
{
    let mut remaining = options.attempts;
    while remaining > 0 {
        remaining -= 1;
        sleep(options.interval).await;
        if test() {
            return PollOutcome::Ready;
        }
    }
    PollOutcome::Exhausted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn poll_resolves_on_third_attempt() {
        let start = std::time::Instant::now();
        let mut checks = 0;
        let outcome = poll(PollOptions::new(3, Duration::from_millis(100)), || {
            checks += 1;
            checks == 3
        })
        .await;
        let elapsed = start.elapsed();

        assert_eq!(outcome, PollOutcome::Ready);
        assert_eq!(checks, 3);
        assert!(elapsed >= Duration::from_millis(290), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(700), "elapsed {elapsed:?}");
    }

    #[tokio::test]
    async fn poll_stops_testing_once_ready() {
        let mut checks = 0;
        let outcome = poll(PollOptions::new(5, Duration::from_millis(10)), || {
            checks += 1;
            checks == 2
        })
        .await;

        assert_eq!(outcome, PollOutcome::Ready);
        assert_eq!(checks, 2);
    }

    #[tokio::test]
    async fn poll_exhausts_silently() {
        let start = std::time::Instant::now();
        let mut checks = 0;
        let outcome = poll(PollOptions::new(3, Duration::from_millis(100)), || {
            checks += 1;
            false
        })
        .await;
        let elapsed = start.elapsed();

        assert_eq!(outcome, PollOutcome::Exhausted);
        assert_eq!(checks, 3);
        assert!(elapsed >= Duration::from_millis(290), "elapsed {elapsed:?}");
    }

    #[tokio::test]
    async fn poll_with_zero_attempts_never_tests() {
        let mut checks = 0;
        let outcome = poll(PollOptions::new(0, Duration::from_millis(10)), || {
            checks += 1;
            true
        })
        .await;

        assert_eq!(outcome, PollOutcome::Exhausted);
        assert_eq!(checks, 0);
    }

    #[test]
    fn poll_budget() {
        let options = PollOptions::default();
        assert_eq!(options.attempts, 50);
        assert_eq!(options.budget(), Duration::from_millis(5000));
    }
}
