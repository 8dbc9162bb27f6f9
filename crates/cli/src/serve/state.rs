//! Shared server state: configuration and the per-IP request limiter.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use super::RATE_LIMIT_WINDOW_SECS;
use crate::config::AppConfig;

/// Fixed-window counters keyed by client IP.
struct Windows {
    /// (requests in window, window start) per IP.
    counts: HashMap<IpAddr, (u64, Instant)>,
    last_sweep: Instant,
}

/// In-memory per-IP rate limiter.
///
/// Expired windows are dropped at most once per window length, so the
/// table only holds clients seen in roughly the last two windows.
pub(crate) struct RateLimiter {
    windows: Mutex<Windows>,
    window: Duration,
    pub(crate) max_requests: u64,
}

impl RateLimiter {
    pub(crate) fn new(max_requests: u64) -> Self {
        Self {
            windows: Mutex::new(Windows {
                counts: HashMap::new(),
                last_sweep: Instant::now(),
            }),
            window: Duration::from_secs(RATE_LIMIT_WINDOW_SECS),
            max_requests,
        }
    }

    /// Count a request from `ip`. `Err` carries the seconds until the
    /// client's window resets.
    pub(crate) async fn check(&self, ip: IpAddr) -> Result<(), u64> {
        self.check_at(ip, Instant::now()).await
    }

    async fn check_at(&self, ip: IpAddr, now: Instant) -> Result<(), u64> {
        let mut windows = self.windows.lock().await;
        let window = self.window;

        if now.saturating_duration_since(windows.last_sweep) >= window {
            let before = windows.counts.len();
            windows
                .counts
                .retain(|_, (_, start)| now.saturating_duration_since(*start) < window);
            windows.last_sweep = now;
            let evicted = before - windows.counts.len();
            if evicted > 0 {
                tracing::debug!(evicted, remaining = windows.counts.len(), "swept rate limit windows");
            }
        }

        let (count, start) = windows.counts.entry(ip).or_insert((0, now));
        let elapsed = now.saturating_duration_since(*start);
        if elapsed >= window {
            *count = 0;
            *start = now;
        }

        *count += 1;
        if *count > self.max_requests {
            let remaining = window.saturating_sub(now.saturating_duration_since(*start));
            Err(remaining.as_secs().max(1))
        } else {
            Ok(())
        }
    }

    #[cfg(test)]
    async fn tracked_clients(&self) -> usize {
        self.windows.lock().await.counts.len()
    }
}

/// Application state shared across request handlers. Read-only apart from
/// the rate limiter.
pub(crate) struct AppState {
    pub(crate) config: AppConfig,
    pub(crate) rate_limiter: RateLimiter,
}
