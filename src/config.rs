//! Checker options.
//!
//! Options can be built in code or loaded from a JSON file:
//!
//! ```json
//! { "cache_size": 4096, "blocked_token": "Bad", "allowed_token": "Good" }
//! ```
//!
//! Missing fields fall back to their defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{BlocklistError, Result};
use crate::types::Verdict;

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Default output token for blocked domains
pub const DEFAULT_BLOCKED_TOKEN: &str = "Bad";

/// Default output token for allowed domains
pub const DEFAULT_ALLOWED_TOKEN: &str = "Good";

/// Options for [`DomainChecker`](crate::checker::DomainChecker) and the harness.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckerOptions {
    /// LRU cache size for verdicts (0 disables the cache)
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
    /// Line printed for a blocked query
    #[serde(default = "default_blocked_token")]
    pub blocked_token: String,
    /// Line printed for an allowed query
    #[serde(default = "default_allowed_token")]
    pub allowed_token: String,
}

fn default_cache_size() -> usize {
    DEFAULT_CACHE_SIZE
}

fn default_blocked_token() -> String {
    DEFAULT_BLOCKED_TOKEN.to_string()
}

fn default_allowed_token() -> String {
    DEFAULT_ALLOWED_TOKEN.to_string()
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
            blocked_token: default_blocked_token(),
            allowed_token: default_allowed_token(),
        }
    }
}

impl CheckerOptions {
    /// Create new checker options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    /// Set output tokens.
    pub fn with_tokens(mut self, blocked: impl Into<String>, allowed: impl Into<String>) -> Self {
        self.blocked_token = blocked.into();
        self.allowed_token = allowed.into();
        self
    }

    /// Parse options from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            BlocklistError::ConfigError(format!(
                "Failed to read options file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&text)
    }

    /// Reject options that would produce ambiguous output.
    pub fn validate(&self) -> Result<()> {
        for (field, token) in [
            ("blocked_token", &self.blocked_token),
            ("allowed_token", &self.allowed_token),
        ] {
            if token.is_empty() {
                return Err(BlocklistError::ConfigError(format!("{field} must not be empty")));
            }
            if token.contains('\n') {
                return Err(BlocklistError::ConfigError(format!(
                    "{field} must be a single line"
                )));
            }
        }
        if self.blocked_token == self.allowed_token {
            return Err(BlocklistError::ConfigError(
                "blocked_token and allowed_token must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Output token for a verdict.
    pub fn token(&self, verdict: Verdict) -> &str {
        match verdict {
            Verdict::Blocked => &self.blocked_token,
            Verdict::Allowed => &self.allowed_token,
        }
    }
}
