use crate::config::NewsApiEnvConfig;
use crate::domain::article::Article;
use crate::domain::errors::NewsSearchError;
use crate::domain::ports::ArticleProvider;
use crate::infrastructure::core::HttpClientFactory;
use crate::infrastructure::core::http_client_factory::build_url_with_query;
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

const EVERYTHING_PATH: &str = "/v2/everything";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EverythingResponse {
    status: Option<String>,
    total_results: Option<u64>,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
    code: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiArticle {
    source: Option<NewsApiSource>,
    author: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    published_at: Option<String>,
    content: Option<String>,
}

impl From<NewsApiArticle> for Article {
    fn from(raw: NewsApiArticle) -> Self {
        Self {
            title: raw.title,
            description: raw.description,
            content: raw.content,
            url: raw.url,
            source_name: raw.source.and_then(|s| s.name),
            published_at: raw.published_at,
            author: raw.author,
        }
    }
}

/// Client for the NewsAPI `/v2/everything` endpoint.
pub struct NewsApiClient {
    client: ClientWithMiddleware,
    endpoint: String,
    api_key: String,
    page_size: u8,
    verified_sources: Vec<String>,
}

impl NewsApiClient {
    pub fn new(config: &NewsApiEnvConfig, verified_sources: Vec<String>) -> Self {
        Self {
            client: HttpClientFactory::create_client(
                Duration::from_secs(config.timeout_secs),
                config.max_retries,
            ),
            endpoint: format!("{}{}", config.base_url, EVERYTHING_PATH),
            api_key: config.api_key.clone(),
            page_size: config.page_size,
            verified_sources,
        }
    }

    fn query_params(&self, query: &str, verified_only: bool) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.to_string()),
            ("pageSize", self.page_size.to_string()),
            ("sortBy", "publishedAt".to_string()),
            ("language", "en".to_string()),
            ("apiKey", self.api_key.clone()),
        ];

        if verified_only {
            params.push(("sources", self.verified_sources.join(",")));
        }

        params
    }
}

/// Decode an `/v2/everything` body into articles.
///
/// A body without an `articles` key yields an empty list; an explicit
/// `"status": "error"` body is reported as an API error.
pub fn parse_everything_body(body: &str) -> Result<Vec<Article>, NewsSearchError> {
    let response: EverythingResponse =
        serde_json::from_str(body).map_err(|e| NewsSearchError::Decode {
            reason: e.to_string(),
        })?;

    if response.status.as_deref() == Some("error") {
        return Err(NewsSearchError::Api {
            code: response.code.unwrap_or_else(|| "unknown".to_string()),
            message: response.message.unwrap_or_default(),
        });
    }

    debug!(
        "News API reported {} total results, {} in page",
        response.total_results.unwrap_or(0),
        response.articles.len()
    );

    Ok(response.articles.into_iter().map(Article::from).collect())
}

#[async_trait]
impl ArticleProvider for NewsApiClient {
    async fn search(&self, query: &str, verified_only: bool) -> Result<Vec<Article>, NewsSearchError> {
        let url = build_url_with_query(&self.endpoint, &self.query_params(query, verified_only))?;
        info!("Searching news for '{}' (verified only: {})", query, verified_only);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NewsSearchError::Transport {
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NewsSearchError::Transport {
                reason: e.to_string(),
            })?;

        if !status.is_success() {
            // NewsAPI explains most rejections in a JSON error body
            return match parse_everything_body(&body) {
                Err(api_error @ NewsSearchError::Api { .. }) => Err(api_error),
                _ => Err(NewsSearchError::Status {
                    status: status.as_u16(),
                    body,
                }),
            };
        }

        parse_everything_body(&body)
    }
}
