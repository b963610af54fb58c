use crate::domain::article::Article;
use crate::domain::errors::NewsSearchError;
use crate::domain::ports::ArticleProvider;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Offline article source backed by a fixed list.
///
/// Articles are returned when the query appears (case-insensitively) in
/// their title, description or body.
pub struct MockArticleProvider {
    articles: Vec<Article>,
    failure: Option<NewsSearchError>,
    calls: AtomicUsize,
}

impl MockArticleProvider {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider that fails every search with `error`.
    pub fn failing(error: NewsSearchError) -> Self {
        Self {
            articles: Vec::new(),
            failure: Some(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// A small built-in set of articles for demos.
    pub fn with_fixtures() -> Self {
        Self::new(fixture_articles())
    }

    /// Number of searches served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockArticleProvider {
    fn default() -> Self {
        Self::with_fixtures()
    }
}

#[async_trait]
impl ArticleProvider for MockArticleProvider {
    async fn search(&self, query: &str, _verified_only: bool) -> Result<Vec<Article>, NewsSearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let needle = query.to_lowercase();
        let matches: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| a.full_text().to_lowercase().contains(&needle))
            .cloned()
            .collect();

        info!("Mock news: {} article(s) for '{}'", matches.len(), query);
        Ok(matches)
    }
}

fn article(
    title: &str,
    description: &str,
    content: &str,
    source: &str,
    author: Option<&str>,
    published_at: &str,
    url: &str,
) -> Article {
    Article {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        content: Some(content.to_string()),
        url: Some(url.to_string()),
        source_name: Some(source.to_string()),
        published_at: Some(published_at.to_string()),
        author: author.map(str::to_string),
    }
}

pub fn fixture_articles() -> Vec<Article> {
    vec![
        article(
            "Climate talks in Geneva end with a hopeful agreement",
            "Negotiators praised the deal as a real breakthrough for climate finance.",
            "Delegates from the United Nations and the European Union met in Geneva this week. \
             UN Secretary-General Antonio Guterres said the climate agreement was a great step. \
             The European Union pledged new funding, and Geneva hosted the signing ceremony.",
            "BBC News",
            Some("Jane Porter"),
            "2024-03-04T09:15:00Z",
            "https://example.com/news/climate-talks-geneva",
        ),
        article(
            "Wildfires spread as climate heat wave worsens",
            "Firefighters struggle against deadly blazes across California.",
            "Thousands were forced to flee as wildfires destroyed homes in California. \
             Officials in Los Angeles warned the disaster could get worse, and the climate crisis \
             was blamed for the terrible conditions.",
            "Reuters",
            None,
            "2024-03-03T17:42:09Z",
            "https://example.com/news/california-wildfires",
        ),
        article(
            "Climate report published ahead of summit",
            "The annual report covers emissions data from 2023.",
            "The report was published by NASA and NOAA on Monday. NASA will present the data \
             at the COP28 summit in Dubai.",
            "Associated Press",
            Some("Lee Park"),
            "not-a-timestamp",
            "https://example.com/news/climate-report",
        ),
        article(
            "Apple unveils new iPhone with longer battery life",
            "The company showed off its latest phone in California.",
            "Apple CEO Tim Cook presented the iPhone at an event in Cupertino. Apple said the \
             iPhone battery lasts longer than ever.",
            "The Verge",
            Some("Sam Ortiz"),
            "2024-02-27T18:00:00Z",
            "https://example.com/news/iphone-launch",
        ),
        article(
            "NASA rover finds signs of ancient lake on Mars",
            "Scientists are excited by the discovery.",
            "NASA scientists said the Perseverance rover found sediment on Mars. NASA plans \
             further study, and the European Space Agency congratulated NASA.",
            "Scientific American",
            None,
            "2024-01-15T06:30:00Z",
            "https://example.com/news/mars-lake",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_by_query() {
        let provider = MockArticleProvider::with_fixtures();
        let articles = tokio_test::block_on(provider.search("Climate", false)).unwrap();
        assert_eq!(articles.len(), 3);
        assert_eq!(provider.calls(), 1);

        let none = tokio_test::block_on(provider.search("cricket", true)).unwrap();
        assert!(none.is_empty());
        assert_eq!(provider.calls(), 2);
    }

    #[test]
    fn test_failing_provider() {
        let provider = MockArticleProvider::failing(NewsSearchError::Transport {
            reason: "offline".to_string(),
        });
        let result = tokio_test::block_on(provider.search("climate", false));
        assert!(result.is_err());
    }
}
