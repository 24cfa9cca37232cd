//! Canonical domain keys.
//!
//! A [`DomainKey`] stores a domain name with its labels reversed (top-level
//! label first), each label followed by a `.` terminator:
//!
//! ```text
//! "gdz.ru"        -> "ru.gdz."
//! "m.gdz.ru"      -> "ru.gdz.m."
//! "com"           -> "com."
//! ""              -> "."
//! ```
//!
//! Because every label ends with the terminator, a character prefix of a
//! canonical string can only stop at a label boundary. "Is a subdomain of"
//! therefore reduces to `str::starts_with`, and `"company"` is never read as
//! nested under `"com"`.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Label separator and terminator in canonical strings.
const LABEL_TERMINATOR: char = '.';

/// Immutable canonical form of a domain name.
///
/// Equality, ordering and hashing only look at the canonical string.
#[derive(Debug, Clone)]
pub struct DomainKey {
    name: String,
    canonical: String,
}

impl DomainKey {
    /// Build the canonical form of `name`. Never fails.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let canonical = canonicalize(&name);
        Self { name, canonical }
    }

    /// The name as it was given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reversed, terminator-delimited label sequence.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Number of labels. An empty name has a single empty label.
    pub fn label_count(&self) -> usize {
        self.canonical.matches(LABEL_TERMINATOR).count()
    }

    /// Returns true if `self` is equal to or nested under `other`.
    ///
    /// `a.is_subdomain_of(&a)` is always true.
    pub fn is_subdomain_of(&self, other: &DomainKey) -> bool {
        self.canonical.starts_with(other.canonical.as_str())
    }
}

fn canonicalize(name: &str) -> String {
    let mut canonical = String::with_capacity(name.len() + 1);
    for label in name.rsplit(LABEL_TERMINATOR) {
        canonical.push_str(label);
        canonical.push(LABEL_TERMINATOR);
    }
    canonical
}

impl PartialEq for DomainKey {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for DomainKey {}

impl Hash for DomainKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for DomainKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DomainKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

impl fmt::Display for DomainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for DomainKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for DomainKey {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl FromStr for DomainKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
