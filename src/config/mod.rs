//! Configuration module for Newsdesk.
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honoured by the binaries) and grouped by concern: the news search API
//! and search behaviour.

mod news_api_config;
mod search_config;

pub use news_api_config::NewsApiEnvConfig;
pub use search_config::SearchEnvConfig;

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Where articles come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The real NewsAPI endpoint
    Live,
    /// Built-in fixture articles, no network
    Mock,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(Mode::Live),
            "mock" => Ok(Mode::Mock),
            _ => anyhow::bail!("Invalid MODE: {}. Must be 'live' or 'mock'", s),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub news_api: NewsApiEnvConfig,
    pub search: SearchEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mode = match lookup("MODE") {
            Some(m) => Mode::from_str(&m)?,
            None => Mode::Live,
        };

        let news_api =
            NewsApiEnvConfig::from_lookup(&lookup).context("Failed to load news API config")?;
        let search = SearchEnvConfig::from_lookup(&lookup).context("Failed to load search config")?;

        if mode == Mode::Live && news_api.api_key.trim().is_empty() {
            anyhow::bail!("NEWSAPI_KEY must be set in live mode (or set MODE=mock)");
        }

        Ok(Self {
            mode,
            news_api,
            search,
        })
    }

    /// Offline configuration used for demos and tests.
    pub fn mock() -> Self {
        Self {
            mode: Mode::Mock,
            news_api: NewsApiEnvConfig::default(),
            search: SearchEnvConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_mode_requires_api_key() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        assert!(err.to_string().contains("NEWSAPI_KEY"));
    }

    #[test]
    fn test_mock_mode_needs_no_key() {
        let config = Config::from_lookup(|key| (key == "MODE").then(|| "Mock".to_string())).unwrap();
        assert_eq!(config.mode, Mode::Mock);
    }

    #[test]
    fn test_invalid_mode() {
        assert!(Mode::from_str("replay").is_err());
        assert_eq!(Mode::from_str("LIVE").unwrap(), Mode::Live);
    }

    #[test]
    fn test_live_mode_with_key() {
        let config = Config::from_lookup(|key| match key {
            "NEWSAPI_KEY" => Some("abc123".to_string()),
            "NEWSDESK_CACHE_TTL_SECS" => Some("0".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.mode, Mode::Live);
        assert_eq!(config.news_api.api_key, "abc123");
        assert_eq!(config.search.cache_ttl_secs, 0);
    }
}
