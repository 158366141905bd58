use std::time::{Duration, Instant};

#[derive(Debug)]
pub(crate) struct Entry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> Entry<V> {
    pub(crate) fn new(value: V, ttl: Duration, now: Instant) -> Self {
        // `Instant + Duration` panics on overflow, so clamp absurd TTLs to roughly a century.
        let expires_at = now
            .checked_add(ttl)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now);

        Self { value, expires_at }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at < now
    }
}

const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_expires_strictly_after_deadline() {
        // given
        let now = Instant::now();
        let entry = Entry::new("value", Duration::from_secs(1), now);

        // then
        assert!(!entry.is_expired_at(now));
        assert!(!entry.is_expired_at(now + Duration::from_secs(1)));
        assert!(entry.is_expired_at(now + Duration::from_millis(1_001)));
    }

    #[test]
    fn it_treats_zero_ttl_as_expiring_immediately_after_insert() {
        // given
        let now = Instant::now();
        let entry = Entry::new("value", Duration::ZERO, now);

        // then
        assert!(!entry.is_expired_at(now));
        assert!(entry.is_expired_at(now + Duration::from_nanos(1)));
    }

    #[test]
    fn it_does_not_overflow_on_huge_ttl() {
        // given
        let now = Instant::now();

        // when
        let entry = Entry::new("value", Duration::MAX, now);

        // then
        assert_eq!(entry.value(), &"value");
        assert!(!entry.is_expired_at(now + Duration::from_secs(3_600)));
    }
}
