//! Minimum-interval rate limiter for outbound completions.
//!
//! Derived from a configured maximum requests per second. Single-caller:
//! the gateway holds it behind `&mut self`, so no internal locking is
//! needed (the dispatch loop handles one update at a time).

use std::time::Duration;

use tokio::time::Instant;

/// Enforces a minimum wall-clock interval between calls to [`acquire`].
///
/// [`acquire`]: RateLimiter::acquire
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    /// Create a limiter from a requests-per-second cap.
    ///
    /// `max_requests_per_second <= 0` disables limiting entirely.
    pub fn new(max_requests_per_second: f64) -> Self {
        let min_interval = if max_requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / max_requests_per_second)
        } else {
            Duration::ZERO
        };
        Self {
            min_interval,
            last_request: None,
        }
    }

    /// Whether limiting is active.
    pub fn is_enabled(&self) -> bool {
        !self.min_interval.is_zero()
    }

    /// Wait until the minimum interval since the previous call has passed.
    ///
    /// Returns immediately when limiting is disabled. Otherwise sleeps for
    /// the remainder of the interval and stamps the current instant on the
    /// way out, regardless of what the caller does with the slot.
    pub async fn acquire(&mut self) {
        if self.min_interval.is_zero() {
            return;
        }

        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }

        self.last_request = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn consecutive_acquires_are_spaced_by_min_interval() {
        let mut limiter = RateLimiter::new(2.0); // 0.5s minimum interval

        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        let elapsed = start.elapsed();

        assert!(
            elapsed >= Duration::from_millis(500),
            "second acquire returned after only {elapsed:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn acquire_does_not_sleep_when_interval_already_passed() {
        let mut limiter = RateLimiter::new(2.0);

        limiter.acquire().await;
        tokio::time::advance(Duration::from_secs(3)).await;

        let start = Instant::now();
        limiter.acquire().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn disabled_limiter_never_sleeps() {
        let mut limiter = RateLimiter::new(0.0);
        assert!(!limiter.is_enabled());

        let start = Instant::now();
        for _ in 0..10 {
            limiter.acquire().await;
        }
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn negative_rate_disables_limiting() {
        let mut limiter = RateLimiter::new(-1.0);
        assert!(!limiter.is_enabled());
        limiter.acquire().await;
    }
}
