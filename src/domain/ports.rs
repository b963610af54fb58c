use crate::domain::article::Article;
use crate::domain::errors::NewsSearchError;
use async_trait::async_trait;

/// Remote news search backend.
#[async_trait]
pub trait ArticleProvider: Send + Sync {
    /// Most-recent-first English articles matching `query`, restricted to
    /// verified publishers when `verified_only` is set. Only the first page
    /// is requested.
    async fn search(&self, query: &str, verified_only: bool) -> Result<Vec<Article>, NewsSearchError>;
}
