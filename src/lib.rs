//! Domain Blocklist - subdomain-aware blocklist matching for Rust
//!
//! This library answers one question for a stream of domain names: is the
//! name on the blocklist, or nested under a name that is?
//!
//! - Canonical [`DomainKey`]s turn "is a subdomain of" into a prefix test
//! - [`BlocklistIndex`] sorts the blocklist and drops entries covered by
//!   another entry, then answers each query with one binary search
//! - [`DomainChecker`] adds an LRU verdict cache on top of a shared index
//!
//! # Example
//!
//! ```rust
//! use domain_blocklist::{build_index, is_forbidden};
//!
//! let index = build_index(["gdz.ru", "maps.me", "m.gdz.ru", "com"]);
//! assert_eq!(index.count(), 3); // m.gdz.ru is covered by gdz.ru
//!
//! assert!(is_forbidden(&index, "aaaa.ssss.gdz.ru"));
//! assert!(is_forbidden(&index, "gdz.com"));
//! assert!(!is_forbidden(&index, "evilgdz.ru"));
//! assert!(!is_forbidden(&index, "gdz.it"));
//! ```
//!
//! # Matching Rules
//!
//! | Blocked | Query | Result |
//! |---------|-------|--------|
//! | `gdz.ru` | `gdz.ru` | blocked (a name blocks itself) |
//! | `gdz.ru` | `a.b.gdz.ru` | blocked |
//! | `gdz.ru` | `ru` | allowed |
//! | `gdz.ru` | `evilgdz.ru` | allowed (labels must match whole) |
//!
//! Names are opaque: no case folding, IDNA or validation is applied.

pub mod checker;
pub mod config;
pub mod error;
pub mod harness;
pub mod matcher;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use checker::DomainChecker;
pub use config::{CheckerOptions, DEFAULT_CACHE_SIZE};
pub use error::{BlocklistError, Result};
pub use harness::run;
pub use matcher::{BlocklistIndex, DomainKey, DomainMatcher};
pub use parser::{read_count, read_domain_section, read_domains, read_domains_from_file};
pub use types::{RunSummary, Verdict};

/// Build a blocklist index from raw domain names.
pub fn build_index<I, S>(names: I) -> BlocklistIndex
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    BlocklistIndex::new(names)
}

/// Check a raw domain name against an index.
pub fn is_forbidden(index: &BlocklistIndex, name: &str) -> bool {
    index.is_forbidden_name(name)
}
