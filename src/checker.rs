use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::config::CheckerOptions;
use crate::matcher::{BlocklistIndex, DomainKey, DomainMatcher};
use crate::types::Verdict;

/// Blocklist checker with an optional LRU verdict cache.
///
/// The index is shared and never locked; only the cache sits behind a mutex.
pub struct DomainChecker {
    index: Arc<BlocklistIndex>,
    cache: Option<Mutex<LruCache<String, bool>>>,
}

impl DomainChecker {
    /// Create a checker over an existing index. `cache_size == 0` disables caching.
    pub fn new(index: impl Into<Arc<BlocklistIndex>>, cache_size: usize) -> Self {
        let cache = NonZeroUsize::new(cache_size).map(|size| Mutex::new(LruCache::new(size)));
        Self {
            index: index.into(),
            cache,
        }
    }

    /// Build the index from raw names and wrap it.
    pub fn from_names<I, S>(names: I, options: &CheckerOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(BlocklistIndex::new(names), options.cache_size)
    }

    /// Shared blocklist index
    pub fn index(&self) -> &Arc<BlocklistIndex> {
        &self.index
    }

    /// Check a raw domain name.
    pub fn check(&self, name: &str) -> Verdict {
        Verdict::from_forbidden(self.cached(name, || self.index.is_forbidden_name(name)))
    }

    /// Check an already canonicalized key.
    pub fn check_key(&self, key: &DomainKey) -> Verdict {
        Verdict::from_forbidden(self.cached(key.name(), || self.index.is_forbidden(key)))
    }

    /// Look `name` up in the cache, computing and storing the answer on a miss.
    ///
    /// Names map one-to-one onto canonical forms, so the name keys the cache.
    fn cached(&self, name: &str, lookup: impl FnOnce() -> bool) -> bool {
        let Some(cache) = &self.cache else {
            return lookup();
        };

        if let Some(&forbidden) = cache.lock().get(name) {
            return forbidden;
        }

        let forbidden = lookup();
        cache.lock().put(name.to_string(), forbidden);
        forbidden
    }

    /// Check every name, returning verdicts in input order.
    pub fn check_all<I, S>(&self, names: I) -> Vec<Verdict>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.check(name.as_ref()))
            .collect()
    }

    /// Number of cached verdicts
    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.lock().len())
    }
}

impl DomainMatcher for DomainChecker {
    fn is_forbidden(&self, key: &DomainKey) -> bool {
        self.check_key(key).is_blocked()
    }
}

impl std::fmt::Debug for DomainChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainChecker")
            .field("entries", &self.index.len())
            .field("cached", &self.cached_len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(names: &[&str], cache_size: usize) -> DomainChecker {
        DomainChecker::from_names(
            names.iter().copied(),
            &CheckerOptions::new().with_cache_size(cache_size),
        )
    }

    #[test]
    fn test_check_scenario() {
        let c = checker(&["gdz.ru", "maps.me", "m.gdz.ru", "com"], 16);
        assert_eq!(c.index().count(), 3);

        let verdicts = c.check_all(["aaaa", ".com", "gdz.it", "aaaa.ssss.gdz.ru"]);
        assert_eq!(
            verdicts,
            vec![
                Verdict::Allowed,
                Verdict::Blocked,
                Verdict::Allowed,
                Verdict::Blocked
            ]
        );
    }

    #[test]
    fn test_cache_hits_return_same_verdict() {
        let c = checker(&["maps.me"], 2);
        assert_eq!(c.check("a.maps.me"), Verdict::Blocked);
        assert_eq!(c.check("a.maps.me"), Verdict::Blocked);
        assert_eq!(c.check("maps.mee"), Verdict::Allowed);
        assert_eq!(c.cached_len(), 2);

        // LRU evicts beyond capacity
        assert_eq!(c.check("x.me"), Verdict::Allowed);
        assert_eq!(c.cached_len(), 2);
    }

    #[test]
    fn test_cache_disabled() {
        let c = checker(&["maps.me"], 0);
        assert_eq!(c.check("maps.me"), Verdict::Blocked);
        assert_eq!(c.cached_len(), 0);
    }

    #[test]
    fn test_shared_index_across_threads() {
        let index = Arc::new(BlocklistIndex::new(["gdz.ru", "com"]));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let c = DomainChecker::new(Arc::clone(&index), 8);
                std::thread::spawn(move || {
                    let q = format!("host{i}.gdz.ru");
                    (c.check(&q), c.check("gdz.it"))
                })
            })
            .collect();

        for h in handles {
            assert_eq!(h.join().unwrap(), (Verdict::Blocked, Verdict::Allowed));
        }
    }

    #[test]
    fn test_check_key_shares_cache_with_check() {
        let c = checker(&["gdz.ru"], 4);
        let key = DomainKey::new("m.gdz.ru");
        assert_eq!(c.check_key(&key), Verdict::Blocked);
        assert_eq!(c.cached_len(), 1);

        // Same name through the raw-name path hits the cached entry
        assert_eq!(c.check("m.gdz.ru"), Verdict::Blocked);
        assert_eq!(c.cached_len(), 1);

        let uncached = checker(&["gdz.ru"], 0);
        assert_eq!(uncached.check_key(&DomainKey::new("evilgdz.ru")), Verdict::Allowed);
        assert_eq!(uncached.cached_len(), 0);
    }

    #[test]
    fn test_checker_as_matcher() {
        let c = checker(&["com"], 4);
        let matcher: &dyn DomainMatcher = &c;
        assert!(matcher.is_forbidden(&DomainKey::new("gdz.com")));
        assert!(!matcher.is_forbidden(&DomainKey::new("compot.a")));
    }
}
