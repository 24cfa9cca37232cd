mod blocklist;
mod key;

pub use blocklist::BlocklistIndex;
pub use key::DomainKey;

/// Trait for blocklist matchers
pub trait DomainMatcher: Send + Sync {
    /// Check if the domain is blocked by this matcher
    fn is_forbidden(&self, key: &DomainKey) -> bool;
}

impl<M: DomainMatcher + ?Sized> DomainMatcher for std::sync::Arc<M> {
    fn is_forbidden(&self, key: &DomainKey) -> bool {
        (**self).is_forbidden(key)
    }
}
