use crate::application::cache::{CacheKey, ResultsCache};
use crate::application::enrichment::{ArticleEnricher, ArticleReport};
use crate::application::fetcher::{ArticleFetcher, FetchOutcome};
use crate::domain::preferences::{ResultCount, SearchRequest};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

pub const NO_ARTICLES_NOTICE: &str = "NO ARTICLES FOUND";

/// Enriched articles for one preference term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermResults {
    pub term: String,
    pub reports: Vec<ArticleReport>,
    /// Why the search failed; the term still renders as having no articles.
    pub failure: Option<String>,
    pub from_cache: bool,
}

impl TermResults {
    pub fn heading(&self) -> String {
        format!("News Articles with {}", self.term)
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Fetches and enriches each term of a search, caching successful terms.
pub struct NewsAggregator {
    fetcher: ArticleFetcher,
    enricher: ArticleEnricher,
    cache: Mutex<ResultsCache>,
}

impl NewsAggregator {
    pub fn new(fetcher: ArticleFetcher, enricher: ArticleEnricher, cache_ttl: Duration) -> Self {
        Self {
            fetcher,
            enricher,
            cache: Mutex::new(ResultsCache::new(cache_ttl)),
        }
    }

    pub async fn search_term(&self, term: &str, verified_only: bool, count: ResultCount) -> TermResults {
        let key = CacheKey::new(term, verified_only, count);
        if let Some(reports) = self.cache.lock().await.get(&key) {
            info!("Serving '{}' from cache ({} article(s))", term, reports.len());
            return TermResults {
                term: term.to_string(),
                reports,
                failure: None,
                from_cache: true,
            };
        }

        match self.fetcher.fetch(term, count, verified_only).await {
            FetchOutcome::Articles(articles) => {
                let reports: Vec<ArticleReport> = articles
                    .into_iter()
                    .map(|article| self.enricher.enrich(article))
                    .collect();
                info!("Prepared {} article(s) for '{}'", reports.len(), term);
                self.cache.lock().await.insert(key, reports.clone());
                TermResults {
                    term: term.to_string(),
                    reports,
                    failure: None,
                    from_cache: false,
                }
            }
            FetchOutcome::Failed(e) => TermResults {
                term: term.to_string(),
                reports: Vec::new(),
                failure: Some(e.to_string()),
                from_cache: false,
            },
        }
    }

    /// Every term of `request`, in order.
    pub async fn run(&self, request: &SearchRequest) -> Vec<TermResults> {
        let mut results = Vec::with_capacity(request.terms.len());
        for term in &request.terms {
            results.push(
                self.search_term(term, request.verified_only, request.count)
                    .await,
            );
        }
        results
    }

    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
        info!("Results cache cleared");
    }
}
