// ============================================================================
// stats.rs - Search Progress Tracking
// ============================================================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Thread-safe progress tracker for a running search
pub struct Statistics {
    attempts: AtomicU64,
    start_time: AtomicU64, // Unix timestamp in seconds
}

impl Statistics {
    pub fn new() -> Self {
        Self {
            attempts: AtomicU64::new(0),
            start_time: AtomicU64::new(Self::now()),
        }
    }

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    /// Record the latest attempt count from the search loop
    pub fn set_attempts(&self, n: u64) {
        self.attempts.store(n, Ordering::Relaxed);
    }

    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    pub fn elapsed(&self) -> f64 {
        let start = self.start_time.load(Ordering::Relaxed);
        Self::now().saturating_sub(start) as f64
    }

    /// Attempts per second since the tracker was created
    pub fn rate(&self) -> f64 {
        let elapsed = self.elapsed();
        if elapsed > 0.0 {
            self.attempts() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Reset for a fresh search phase
    pub fn reset(&self) {
        self.attempts.store(0, Ordering::Relaxed);
        self.start_time.store(Self::now(), Ordering::Relaxed);
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}
