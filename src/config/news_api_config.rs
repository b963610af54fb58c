//! News search API configuration parsing from environment variables.

use anyhow::{Context, Result};

/// NewsAPI connection settings
#[derive(Debug, Clone)]
pub struct NewsApiEnvConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub page_size: u8,
}

impl Default for NewsApiEnvConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://newsapi.org".to_string(),
            timeout_secs: 30,
            max_retries: 0, // single attempt per term
            page_size: 100,
        }
    }
}

impl NewsApiEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let timeout_secs = match lookup("NEWSAPI_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .context("Failed to parse NEWSAPI_TIMEOUT_SECS")?,
            None => defaults.timeout_secs,
        };

        let max_retries = match lookup("NEWSAPI_MAX_RETRIES") {
            Some(v) => v
                .parse::<u32>()
                .context("Failed to parse NEWSAPI_MAX_RETRIES")?,
            None => defaults.max_retries,
        };

        let page_size = match lookup("NEWSAPI_PAGE_SIZE") {
            Some(v) => v
                .parse::<u8>()
                .context("Failed to parse NEWSAPI_PAGE_SIZE")?
                .clamp(1, 100),
            None => defaults.page_size,
        };

        Ok(Self {
            api_key: lookup("NEWSAPI_KEY").unwrap_or_default(),
            base_url: lookup("NEWSAPI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout_secs,
            max_retries,
            page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_api_config_defaults() {
        let config = NewsApiEnvConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url, "https://newsapi.org");
        assert_eq!(config.page_size, 100);
        assert_eq!(config.max_retries, 0);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_news_api_config_overrides() {
        let config = NewsApiEnvConfig::from_lookup(|key| match key {
            "NEWSAPI_KEY" => Some("secret".to_string()),
            "NEWSAPI_BASE_URL" => Some("http://localhost:9000/".to_string()),
            "NEWSAPI_PAGE_SIZE" => Some("250".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.page_size, 100);
    }

    #[test]
    fn test_news_api_config_rejects_garbage() {
        let result = NewsApiEnvConfig::from_lookup(|key| {
            (key == "NEWSAPI_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert!(result.is_err());
    }
}
