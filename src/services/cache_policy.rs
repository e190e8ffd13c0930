use crate::config::CacheConfig;
use crate::domain::Category;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Time-based freshness rule of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// Maximum age in minutes; `None` never expires.
    pub max_age: Option<u32>,
}

impl CachePolicy {
    #[must_use]
    pub const fn never_expires() -> Self {
        Self { max_age: None }
    }

    #[must_use]
    pub const fn minutes(max_age: u32) -> Self {
        Self {
            max_age: Some(max_age),
        }
    }

    #[must_use]
    pub fn for_category(config: &CacheConfig, category: Category) -> Self {
        Self {
            max_age: config.max_age_minutes(category),
        }
    }

    /// Rows are stale once their age strictly exceeds the threshold.
    #[must_use]
    pub fn is_stale(&self, created_at: i64, now: i64) -> bool {
        self.max_age.is_some_and(|minutes| {
            now.saturating_sub(created_at) > i64::from(minutes) * MILLIS_PER_MINUTE
        })
    }

    /// Age of a row in whole minutes, for logging.
    #[must_use]
    pub fn age_minutes(created_at: i64, now: i64) -> i64 {
        now.saturating_sub(created_at) / MILLIS_PER_MINUTE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn exactly_at_threshold_is_fresh() {
        let policy = CachePolicy::minutes(1);
        assert!(!policy.is_stale(NOW - 60_000, NOW));
        assert!(policy.is_stale(NOW - 60_001, NOW));
    }

    #[test]
    fn never_expires_ignores_age() {
        let policy = CachePolicy::never_expires();
        assert!(!policy.is_stale(0, NOW));
    }

    #[test]
    fn future_rows_are_fresh() {
        assert!(!CachePolicy::minutes(2).is_stale(NOW + 5_000, NOW));
    }

    #[test]
    fn thresholds_follow_config() {
        let config = CacheConfig::default();
        assert_eq!(
            CachePolicy::for_category(&config, Category::Weather),
            CachePolicy::minutes(1)
        );
        assert_eq!(
            CachePolicy::for_category(&config, Category::Trail),
            CachePolicy::minutes(5)
        );
        assert_eq!(
            CachePolicy::for_category(&config, Category::Location),
            CachePolicy::never_expires()
        );
    }

    #[test]
    fn age_in_minutes_truncates() {
        assert_eq!(CachePolicy::age_minutes(NOW - 3 * 60_000 - 59_999, NOW), 3);
    }
}
