//! Clock adapters

use crate::ports::Clock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Wall clock with block height derived from elapsed time since genesis
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    pub genesis_time: u64,
    pub block_time_secs: u64,
}

impl SystemClock {
    pub fn new(genesis_time: u64, block_time_secs: u64) -> Self {
        Self {
            genesis_time,
            block_time_secs,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(0, 12)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }

    fn block_height(&self) -> u64 {
        let now = self.now();
        if now < self.genesis_time || self.block_time_secs == 0 {
            return 0;
        }
        (now - self.genesis_time) / self.block_time_secs
    }
}

/// Manually driven clock for tests and simulations
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
    block_height: AtomicU64,
}

impl ManualClock {
    pub fn new(now: u64) -> Self {
        Self {
            now: AtomicU64::new(now),
            block_height: AtomicU64::new(0),
        }
    }

    pub fn set_time(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Move time forward by `secs`
    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }

    pub fn set_block_height(&self, height: u64) {
        self.block_height.store(height, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }

    fn block_height(&self) -> u64 {
        self.block_height.load(Ordering::SeqCst)
    }
}
