use std::fmt;

/// Outcome of checking one domain against the blocklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Domain is a blocked entry or nested under one
    Blocked,
    /// Domain is not covered by any entry
    Allowed,
}

impl Verdict {
    /// Map a boolean "forbidden" answer to a verdict
    pub fn from_forbidden(forbidden: bool) -> Self {
        if forbidden {
            Verdict::Blocked
        } else {
            Verdict::Allowed
        }
    }

    /// Check if this verdict blocks the domain
    pub fn is_blocked(&self) -> bool {
        matches!(self, Verdict::Blocked)
    }
}

impl From<bool> for Verdict {
    fn from(forbidden: bool) -> Self {
        Self::from_forbidden(forbidden)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Blocked => f.write_str("blocked"),
            Verdict::Allowed => f.write_str("allowed"),
        }
    }
}

/// Counters reported by a harness run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Blocklist lines read
    pub blocklist_entries: usize,
    /// Entries left after removing duplicates and nested names
    pub retained: usize,
    /// Query lines read
    pub queries: usize,
    /// Queries answered with [`Verdict::Blocked`]
    pub blocked: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_from_bool() {
        assert_eq!(Verdict::from(true), Verdict::Blocked);
        assert_eq!(Verdict::from(false), Verdict::Allowed);
        assert!(Verdict::Blocked.is_blocked());
        assert!(!Verdict::Allowed.is_blocked());
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Blocked.to_string(), "blocked");
        assert_eq!(Verdict::Allowed.to_string(), "allowed");
    }
}
