//! Search behaviour configuration parsing from environment variables.

use crate::domain::preferences::ResultCount;
use crate::domain::sources::default_verified_sources;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct SearchEnvConfig {
    pub default_count: ResultCount,
    pub cache_ttl_secs: u64,
    pub verified_sources: Vec<String>,
}

impl Default for SearchEnvConfig {
    fn default() -> Self {
        Self {
            default_count: ResultCount::default(),
            cache_ttl_secs: 300,
            verified_sources: default_verified_sources(),
        }
    }
}

impl SearchEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let default_count = match lookup("NEWSDESK_DEFAULT_COUNT") {
            Some(v) => ResultCount::clamped(
                v.parse::<i64>()
                    .context("Failed to parse NEWSDESK_DEFAULT_COUNT")?,
            ),
            None => defaults.default_count,
        };

        let cache_ttl_secs = match lookup("NEWSDESK_CACHE_TTL_SECS") {
            Some(v) => v
                .parse::<u64>()
                .context("Failed to parse NEWSDESK_CACHE_TTL_SECS")?,
            None => defaults.cache_ttl_secs,
        };

        // Same comma rules as the preference box
        let verified_sources = lookup("NEWSDESK_VERIFIED_SOURCES")
            .map(|list| crate::domain::preferences::parse_preferences(&list))
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.verified_sources);

        Ok(Self {
            default_count,
            cache_ttl_secs,
            verified_sources,
        })
    }
}
