//! Sorted, deduplicated blocklist.
//!
//! Keys are kept in canonical order with every entry covered by an earlier
//! entry removed, so no retained key is nested under another. A query is
//! then blocked iff the largest retained key `<=` the query is its ancestor.

use tracing::debug;

use super::key::DomainKey;
use super::DomainMatcher;

/// Immutable blocklist index
#[derive(Debug, Clone, Default)]
pub struct BlocklistIndex {
    /// Retained roots in canonical order
    keys: Vec<DomainKey>,
}

impl BlocklistIndex {
    /// Build an index from raw domain names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_keys(names.into_iter().map(DomainKey::new).collect())
    }

    /// Build an index from already constructed keys.
    pub fn from_keys(mut keys: Vec<DomainKey>) -> Self {
        let input = keys.len();
        keys.sort_unstable();

        // Descendants sort right after their ancestor, so comparing against
        // the last retained key is enough.
        let mut retained: Vec<DomainKey> = Vec::with_capacity(keys.len());
        for key in keys {
            match retained.last() {
                Some(ancestor) if key.is_subdomain_of(ancestor) => continue,
                _ => retained.push(key),
            }
        }
        retained.shrink_to_fit();

        debug!(
            input,
            retained = retained.len(),
            "built blocklist index"
        );

        Self { keys: retained }
    }

    /// Retained entry that covers `query`, if any.
    pub fn find_ancestor(&self, query: &DomainKey) -> Option<&DomainKey> {
        // Upper bound: index of the first key strictly greater than query.
        let pos = self.keys.partition_point(|k| k <= query);
        let candidate = self.keys[..pos].last()?;
        query.is_subdomain_of(candidate).then_some(candidate)
    }

    /// Check whether `query` is a blocked entry or nested under one.
    pub fn is_forbidden(&self, query: &DomainKey) -> bool {
        self.find_ancestor(query).is_some()
    }

    /// Convenience wrapper that canonicalizes `name` first.
    pub fn is_forbidden_name(&self, name: &str) -> bool {
        self.is_forbidden(&DomainKey::new(name))
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Alias for [`len`](Self::len).
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Retained entries in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, DomainKey> {
        self.keys.iter()
    }
}

impl DomainMatcher for BlocklistIndex {
    fn is_forbidden(&self, key: &DomainKey) -> bool {
        BlocklistIndex::is_forbidden(self, key)
    }
}

impl<S: AsRef<str>> FromIterator<S> for BlocklistIndex {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_keys(
            iter.into_iter()
                .map(|name| DomainKey::new(name.as_ref()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a BlocklistIndex {
    type Item = &'a DomainKey;
    type IntoIter = std::slice::Iter<'a, DomainKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
