pub mod entity_recognizer;
pub mod mock_news;
pub mod newsapi;
pub mod sentiment_analyzer;

pub use entity_recognizer::GazetteerEntityRecognizer;
pub use mock_news::MockArticleProvider;
pub use newsapi::NewsApiClient;
pub use sentiment_analyzer::VaderSentimentScorer;
