use crate::domain::article::Article;
use crate::domain::entities::{EntityOutcome, EntityRecognizer};
use crate::domain::published_date::format_published;
use crate::domain::sentiment::{SentimentOutcome, SentimentScorer, classify};
use crate::domain::word_cloud::{WordCloud, WordCloudBuilder};
use serde::Serialize;
use std::sync::Arc;

/// Everything the article section shows, computed off the UI thread.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleReport {
    pub article: Article,
    /// Display date, or the raw value when it does not parse.
    pub published: String,
    pub sentiment: SentimentOutcome,
    /// Blank canvas when the article has no body text.
    pub word_cloud: WordCloud,
    pub entities: EntityOutcome,
}

impl ArticleReport {
    pub fn published_line(&self) -> String {
        format!("Published on {}", self.published)
    }

    pub fn byline(&self) -> String {
        format!(
            "Published by {} via {}",
            self.article.display_author(),
            self.article.display_source()
        )
    }

    pub fn sentiment_line(&self) -> String {
        format!("Sentiment Classification: {}", self.sentiment.display_label())
    }
}

/// Adds sentiment, word cloud and entity chart to fetched articles.
pub struct ArticleEnricher {
    scorer: Arc<dyn SentimentScorer>,
    recognizer: Arc<dyn EntityRecognizer>,
    word_clouds: WordCloudBuilder,
}

impl ArticleEnricher {
    pub fn new(scorer: Arc<dyn SentimentScorer>, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            scorer,
            recognizer,
            word_clouds: WordCloudBuilder::default(),
        }
    }

    pub fn with_word_clouds(mut self, builder: WordCloudBuilder) -> Self {
        self.word_clouds = builder;
        self
    }

    pub fn enrich(&self, article: Article) -> ArticleReport {
        let published = article
            .published_at
            .as_deref()
            .map(format_published)
            .unwrap_or_default();
        let sentiment = classify(Some(&article), self.scorer.as_ref());
        let word_cloud = self.word_clouds.build(&article);
        let entities = EntityOutcome::from_article(&article, self.recognizer.as_ref());

        ArticleReport {
            article,
            published,
            sentiment,
            word_cloud,
            entities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RecognizedEntity;
    use crate::domain::errors::SentimentError;
    use crate::domain::sentiment::SentimentLabel;

    struct FixedScorer(f64);

    impl SentimentScorer for FixedScorer {
        fn compound(&self, _text: &str) -> Result<f64, SentimentError> {
            Ok(self.0)
        }
    }

    struct NoEntities;

    impl EntityRecognizer for NoEntities {
        fn recognize(&self, _text: &str) -> Vec<RecognizedEntity> {
            Vec::new()
        }
    }

    fn enricher(score: f64) -> ArticleEnricher {
        ArticleEnricher::new(Arc::new(FixedScorer(score)), Arc::new(NoEntities))
    }

    #[test]
    fn test_enrich_full_article() {
        let report = enricher(0.6).enrich(Article {
            title: Some("Harvest festival returns".to_string()),
            content: Some("Farmers gathered for the harvest festival and harvest market.".to_string()),
            source_name: Some("Local Paper".to_string()),
            published_at: Some("2024-03-04T09:15:00Z".to_string()),
            ..Default::default()
        });

        assert_eq!(report.published_line(), "Published on March 04 at 09:15 AM");
        assert_eq!(report.byline(), "Published by Unknown via Local Paper");
        assert_eq!(report.sentiment.label(), Some(SentimentLabel::Positive));
        assert_eq!(report.sentiment_line(), "Sentiment Classification: Positive");
        assert!(!report.word_cloud.is_empty());
        assert_eq!(report.entities, EntityOutcome::NoEntities);
    }

    #[test]
    fn test_enrich_without_body_or_date() {
        let report = enricher(-0.4).enrich(Article {
            title: Some("Bridge closed".to_string()),
            published_at: Some("yesterday".to_string()),
            ..Default::default()
        });

        assert_eq!(report.published, "yesterday");
        assert!(report.word_cloud.is_empty());
        assert_eq!(report.word_cloud.width, 400);
        assert_eq!(report.entities, EntityOutcome::Skipped);
        assert_eq!(report.sentiment.label(), Some(SentimentLabel::Negative));
    }
}
