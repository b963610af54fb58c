use crate::config::{Config, Mode};
use crate::domain::entities::EntityRecognizer;
use crate::domain::ports::ArticleProvider;
use crate::domain::sentiment::SentimentScorer;
use crate::infrastructure::news::{
    GazetteerEntityRecognizer, MockArticleProvider, NewsApiClient, VaderSentimentScorer,
};
use std::sync::Arc;
use tracing::info;

/// Adapters selected for the configured mode.
pub struct Services {
    pub provider: Arc<dyn ArticleProvider>,
    pub scorer: Arc<dyn SentimentScorer>,
    pub recognizer: Arc<dyn EntityRecognizer>,
}

pub struct ServiceFactory;

impl ServiceFactory {
    pub fn create_services(config: &Config) -> Services {
        Services {
            provider: Self::create_provider(config),
            scorer: Arc::new(VaderSentimentScorer::new()),
            recognizer: Arc::new(GazetteerEntityRecognizer::new()),
        }
    }

    pub fn create_provider(config: &Config) -> Arc<dyn ArticleProvider> {
        match config.mode {
            Mode::Mock => {
                info!("Using built-in mock articles");
                Arc::new(MockArticleProvider::with_fixtures())
            }
            Mode::Live => {
                info!("Using NewsAPI at {}", config.news_api.base_url);
                Arc::new(NewsApiClient::new(
                    &config.news_api,
                    config.search.verified_sources.clone(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_mode_serves_fixtures() {
        let services = ServiceFactory::create_services(&Config::mock());
        let articles = tokio_test::block_on(services.provider.search("climate", false)).unwrap();
        assert_eq!(articles.len(), 3);
    }
}
