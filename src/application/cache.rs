use crate::application::enrichment::ArticleReport;
use crate::domain::preferences::ResultCount;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub term: String,
    pub verified_only: bool,
    pub count: ResultCount,
}

impl CacheKey {
    pub fn new(term: &str, verified_only: bool, count: ResultCount) -> Self {
        Self {
            term: term.to_string(),
            verified_only,
            count,
        }
    }
}

struct CacheEntry {
    stored_at: Instant,
    reports: Vec<ArticleReport>,
}

/// In-memory cache of enriched results per search term.
///
/// Entries older than the TTL are treated as missing; a zero TTL disables
/// caching.
pub struct ResultsCache {
    ttl: Duration,
    entries: HashMap<CacheKey, CacheEntry>,
}

impl ResultsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<Vec<ArticleReport>> {
        self.get_at(key, Instant::now())
    }

    fn get_at(&self, key: &CacheKey, now: Instant) -> Option<Vec<ArticleReport>> {
        self.entries
            .get(key)
            .filter(|entry| now.saturating_duration_since(entry.stored_at) < self.ttl)
            .map(|entry| entry.reports.clone())
    }

    pub fn insert(&mut self, key: CacheKey, reports: Vec<ArticleReport>) {
        if self.ttl.is_zero() {
            return;
        }
        let now = Instant::now();
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.stored_at) < self.ttl);
        self.entries.insert(
            key,
            CacheEntry {
                stored_at: now,
                reports,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(term: &str) -> CacheKey {
        CacheKey::new(term, false, ResultCount::default())
    }

    #[test]
    fn test_hit_until_ttl_expires() {
        let mut cache = ResultsCache::new(Duration::from_secs(60));
        cache.insert(key("climate"), Vec::new());

        let now = Instant::now();
        assert!(cache.get_at(&key("climate"), now).is_some());
        assert!(cache.get_at(&key("climate"), now + Duration::from_secs(61)).is_none());
    }

    #[test]
    fn test_key_includes_flags_and_count() {
        let mut cache = ResultsCache::new(Duration::from_secs(60));
        cache.insert(key("climate"), Vec::new());

        assert!(cache.get(&CacheKey::new("climate", true, ResultCount::default())).is_none());
        assert!(cache.get(&CacheKey::new("climate", false, ResultCount::clamped(3))).is_none());
        assert!(cache.get(&key("Climate")).is_none());
    }

    #[test]
    fn test_zero_ttl_disables_and_clear_empties() {
        let mut disabled = ResultsCache::new(Duration::ZERO);
        disabled.insert(key("climate"), Vec::new());
        assert!(disabled.is_empty());

        let mut cache = ResultsCache::new(Duration::from_secs(60));
        cache.insert(key("climate"), Vec::new());
        cache.insert(key("space"), Vec::new());
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.get(&key("space")).is_none());
    }
}
