use crate::domain::errors::NewsSearchError;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use std::time::Duration;
use url::Url;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates a new HTTP client with retry middleware.
    ///
    /// `max_retries` of zero means one attempt per request.
    pub fn create_client(timeout: Duration, max_retries: u32) -> ClientWithMiddleware {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(max_retries);

        let client = Client::builder()
            .pool_max_idle_per_host(5)
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build()
    }
}

/// Build a URL with percent-encoded query parameters.
///
/// reqwest-middleware's request builder has no `.query()`, so parameters are
/// encoded into the URL up front.
pub fn build_url_with_query<K, V>(base_url: &str, params: &[(K, V)]) -> Result<Url, NewsSearchError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    Url::parse_with_params(
        base_url,
        params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())),
    )
    .map_err(|e| NewsSearchError::InvalidUrl {
        reason: format!("{}: {}", base_url, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_percent_encoded() {
        let url = build_url_with_query(
            "https://newsapi.org/v2/everything",
            &[("q", "climate change"), ("sources", "bbc-news,cnn")],
        )
        .unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs[0], ("q".to_string(), "climate change".to_string()));
        assert_eq!(pairs[1], ("sources".to_string(), "bbc-news,cnn".to_string()));
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = build_url_with_query::<&str, &str>("not a url", &[]);
        assert!(matches!(result, Err(NewsSearchError::InvalidUrl { .. })));
    }
}
