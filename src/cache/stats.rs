use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of the cache counters since the previous call to [`crate::Cache::stats`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Stats {
    pub hit_count: u64,
    pub miss_count: u64,
    /// Entries removed through [`crate::Cache::delete`].
    pub delete_count: u64,
    /// Entries removed by a sweep, automatic or manual.
    pub expired_count: u64,
    pub millis_elapsed: u128,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    hit_count: AtomicU64,
    miss_count: AtomicU64,
    delete_count: AtomicU64,
    expired_count: AtomicU64,
}

impl Counters {
    pub(crate) fn increment_hit_count(&self) {
        self.hit_count.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn increment_miss_count(&self) {
        self.miss_count.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn increment_delete_count(&self) {
        self.delete_count.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn add_expired_count(&self, count: u64) {
        self.expired_count.fetch_add(count, Ordering::AcqRel);
    }

    /// Reads and zeroes every counter.
    pub(crate) fn take(&self, millis_elapsed: u128) -> Stats {
        Stats {
            hit_count: self.hit_count.swap(0, Ordering::AcqRel),
            miss_count: self.miss_count.swap(0, Ordering::AcqRel),
            delete_count: self.delete_count.swap(0, Ordering::AcqRel),
            expired_count: self.expired_count.swap(0, Ordering::AcqRel),
            millis_elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_takes_and_resets_counters() {
        // given
        let counters = Counters::default();
        counters.increment_hit_count();
        counters.increment_hit_count();
        counters.increment_miss_count();
        counters.increment_delete_count();
        counters.add_expired_count(3);

        // when
        let stats = counters.take(42);

        // then
        assert_eq!(
            stats,
            Stats {
                hit_count: 2,
                miss_count: 1,
                delete_count: 1,
                expired_count: 3,
                millis_elapsed: 42,
            }
        );
        assert_eq!(counters.take(0), Stats::default());
    }
}
