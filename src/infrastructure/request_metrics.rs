//! Process-wide request counter and uptime clock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Request counter and start time, created once at startup.
///
/// Kept separate from the link store: it only observes traffic. Each
/// recorded request is also forwarded to the `metrics` facade as
/// `http_requests_total`, so an exporter installed by the host process picks
/// it up.
#[derive(Debug)]
pub struct RequestMetrics {
    started_at: Instant,
    total_requests: AtomicU64,
}

impl RequestMetrics {
    /// Starts the uptime clock with a zeroed counter.
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            total_requests: AtomicU64::new(0),
        }
    }

    /// Counts one inbound request.
    pub fn record_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("http_requests_total").increment(1);
    }

    /// Requests counted since startup.
    pub fn total_requests(&self) -> u64 {
        self.total_requests.load(Ordering::Relaxed)
    }

    /// Time elapsed since startup.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for RequestMetrics {
    fn default() -> Self {
        Self::new()
    }
}
