// Wait - Bounded polling primitive
//
// Every explicit wait in the harness goes through poll_until(): one
// probe closure, one timeout, one poll interval. Page objects name the
// condition; they never carry their own polling loops.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Default timeout for explicit waits (10 seconds)
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default polling interval for explicit waits (500ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// How long a wait may poll, and how often.
///
/// Fixed at the harness level; a [`crate::locator::Locator`] may
/// override the timeout for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WaitPolicy {
    /// Creates a policy with the given timeout and the default poll interval.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Sets the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Polls `probe` until it yields a value or the policy's timeout elapses.
///
/// The probe returns `Ok(Some(value))` when the condition holds,
/// `Ok(None)` to keep polling, or `Err(..)` for a driver-level failure,
/// which propagates immediately and aborts the wait. On timeout the
/// error names `what` so the failing condition shows up in test output.
pub async fn poll_until<T, F, Fut>(policy: WaitPolicy, what: &str, mut probe: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let start = Instant::now();

    loop {
        if let Some(value) = probe().await? {
            return Ok(value);
        }

        if start.elapsed() >= policy.timeout {
            return Err(Error::WaitTimeout {
                what: what.to_string(),
                timeout: policy.timeout,
            });
        }

        tokio::time::sleep(policy.poll_interval).await;
    }
}
