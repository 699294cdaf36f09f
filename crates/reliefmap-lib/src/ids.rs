//! Record id generation shared by every collection.
//!
//! Ids are derived from wall-clock milliseconds so they stay roughly sortable
//! by creation time, but each new id is forced past the previous one. Two
//! records created inside the same millisecond therefore still get distinct
//! ids.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Identifier assigned to every stored record.
pub type RecordId = u64;

/// Monotonic, timestamp-seeded id source.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    /// Create a generator that has not issued any ids yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id: `max(now_millis, last + 1)`.
    pub fn next_id(&self) -> RecordId {
        let now = now_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last.saturating_add(1));
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }

    /// Record an id issued elsewhere (e.g. seed data) so it is never reissued.
    pub fn observe(&self, id: RecordId) {
        self.last.fetch_max(id, Ordering::AcqRel);
    }

    /// The most recently issued or observed id.
    pub fn last_id(&self) -> RecordId {
        self.last.load(Ordering::Acquire)
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
