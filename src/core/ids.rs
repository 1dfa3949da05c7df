//! Record id generation.

/// Monotonic id generator injected into the record store.
///
/// Seeded from the wall clock (epoch milliseconds) but never below one past
/// the highest persisted id, so restarts within the same millisecond cannot
/// reissue an id that is already on disk.
#[derive(Debug)]
pub struct IdGenerator {
    next: i64,
}

impl IdGenerator {
    pub fn seeded(max_existing: Option<i64>, now_ms: i64) -> Self {
        let floor = max_existing.map(|id| id + 1).unwrap_or(0);
        Self {
            next: now_ms.max(floor),
        }
    }

    pub fn next(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}
