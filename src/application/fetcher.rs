use crate::domain::article::Article;
use crate::domain::errors::NewsSearchError;
use crate::domain::ports::ArticleProvider;
use crate::domain::preferences::ResultCount;
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of fetching one preference term.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Articles(Vec<Article>),
    /// The search failed; rendered exactly like an empty result.
    Failed(NewsSearchError),
}

impl FetchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Articles to render; a failure renders as none.
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            Self::Articles(articles) => articles,
            Self::Failed(_) => Vec::new(),
        }
    }
}

pub struct ArticleFetcher {
    provider: Arc<dyn ArticleProvider>,
}

impl ArticleFetcher {
    pub fn new(provider: Arc<dyn ArticleProvider>) -> Self {
        Self { provider }
    }

    /// Search `query` and keep at most `limit` articles, newest first as served.
    pub async fn fetch(&self, query: &str, limit: ResultCount, verified_only: bool) -> FetchOutcome {
        match self.provider.search(query, verified_only).await {
            Ok(mut articles) => {
                debug!("Fetched {} article(s) for '{}', keeping {}", articles.len(), query, limit);
                articles.truncate(limit.get());
                FetchOutcome::Articles(articles)
            }
            Err(e) => {
                warn!("News search for '{}' failed: {}", query, e);
                FetchOutcome::Failed(e)
            }
        }
    }
}
